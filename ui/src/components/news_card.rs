use payloads::{Article, Popularity};
use yew::prelude::*;

use crate::utils::format::interest;

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub article: Article,
    /// The thumbnail is in the image cache; until then a placeholder of the
    /// same size is shown.
    #[prop_or_default]
    pub thumbnail_ready: bool,
}

#[function_component]
pub fn NewsCard(props: &NewsCardProps) -> Html {
    let article = &props.article;

    let thumbnail = match &article.thumbnail {
        Some(src) if props.thumbnail_ready => html! {
            <img
                src={src.clone()}
                alt={article.headline.clone()}
                class="w-full h-48 object-cover rounded-2xl mb-4"
            />
        },
        Some(_) => html! {
            <div class="w-full h-48 rounded-2xl mb-4 bg-neutral-200 \
                        dark:bg-neutral-700 animate-pulse" />
        },
        None => html! {},
    };

    html! {
        <div class="flex flex-col justify-between shadow-lg p-8 m-5 \
                    bg-neutral-300/20 max-w-[600px] min-h-[300px] \
                    rounded-2xl">
            <div class="flex flex-col gap-3">
                {thumbnail}
                <div class="flex flex-row gap-4 items-center">
                    <h2 class="text-lg font-semibold">
                        {&article.headline}
                    </h2>
                    <SectionTag section={article.news_section.clone()} />
                </div>
                <p class="text-sm">{&article.summary}</p>
                <a
                    class="text-blue-500"
                    href={article.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Read more"}
                </a>
            </div>
            <div class="flex flex-row gap-5 mt-4">
                <div class="flex flex-col">
                    <p class="font-semibold">
                        {format!("Peak Interest: {}",
                                 interest(article.peak_interest))}
                    </p>
                    <p class="font-semibold">
                        {format!("Current Interest: {}",
                                 interest(article.current_interest))}
                    </p>
                </div>
                <PopularityBadge popularity={article.popularity()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTagProps {
    pub section: Option<String>,
}

#[function_component]
fn SectionTag(props: &SectionTagProps) -> Html {
    let section = props.section.as_deref().unwrap_or("general");
    html! {
        <span class="text-xs uppercase tracking-wide px-2 py-0.5 rounded-full \
                     bg-neutral-200 dark:bg-neutral-700 \
                     text-neutral-600 dark:text-neutral-300">
            {section}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct PopularityBadgeProps {
    pub popularity: Popularity,
}

#[function_component]
fn PopularityBadge(props: &PopularityBadgeProps) -> Html {
    let (icon, label, color) = match props.popularity {
        Popularity::High => ("🔥", "Trending", "text-red-500"),
        Popularity::Medium => ("🔥", "Popular", "text-yellow-500"),
        Popularity::Low => ("❄", "Cooling", "text-blue-500"),
    };

    html! {
        <div
            class={classes!("flex", "flex-row", "items-center", "gap-2",
                            "mt-2", color)}
            title={label}
        >
            <span aria-hidden="true">{icon}</span>
            <span class="text-sm">{label}</span>
        </div>
    }
}
