use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::{MainLayout, RegisterButton};
use crate::components::NewsList;
use crate::contexts::ImageCacheProvider;
use crate::hooks::{use_news_report, use_title};

/// How many articles the landing page previews.
const LATEST_NEWS_COUNT: usize = 3;

const SECONDARY_BUTTON: &str = "ml-3 bg-neutral-50 text-black text-sm p-2 \
                                rounded-sm border-2 border-neutral-50 \
                                hover:bg-black hover:border-black \
                                hover:text-white";

#[function_component]
pub fn LandingPage() -> Html {
    use_title("Stay tuned");

    html! {
        <ImageCacheProvider>
            <MainLayout>
                <Hero />
                <LatestNews />
                <Features />
                <SeeAlso />
                <SubscribeStrip />
            </MainLayout>
        </ImageCacheProvider>
    }
}

#[function_component]
fn Hero() -> Html {
    html! {
        <section class="w-full sm:mt-10 mb-6 px-3">
            <h1 class="text-2xl font-bold sm:text-4xl">{"Stay tuned"}</h1>
            <p class="my-2 text-neutral-500 font-light text-sm sm:text-base">
                {"Register to be notified about the latest news."}
            </p>
            <RegisterButton primary=true />
        </section>
    }
}

#[function_component]
fn LatestNews() -> Html {
    let news = use_news_report();

    html! {
        <section class="w-full lg:p-5 sm:mt-10 mb-10">
            <h1 class="ml-3 text-2xl font-bold">{"Latest News"}</h1>
            {news.render("latest news", |feed, _, _| {
                let latest: Vec<_> =
                    feed.0.iter().take(LATEST_NEWS_COUNT).cloned().collect();
                html! {
                    <NewsList
                        articles={latest}
                        class="pl-3 py-5 flex flex-row overflow-x-auto gap-4 \
                               lg:grid lg:grid-cols-3 lg:overflow-x-visible"
                    />
                }
            })}
        </section>
    }
}

#[function_component]
fn Features() -> Html {
    let features = [
        (
            "Gather Reliable Information",
            "The information is gathered from reliable sources with a \
             strong reputation.",
        ),
        (
            "Analyze Popularity",
            "We estimate the popularity of the latest news using Google \
             Trends.",
        ),
        (
            "Deliver Daily Digest",
            "We provide a daily digest of the most important news updates.",
        ),
    ];

    html! {
        <section class="pb-10 px-3">
            <h1 class="font-bold text-2xl pb-3 mb-3">
                {"How We Keep You Updated"}
            </h1>
            <div class="mb-5 max-w-md flex flex-col gap-4 px-5">
                {for features.iter().map(|(title, text)| html! {
                    <div key={*title}>
                        <h2 class="mb-2 font-medium">{*title}</h2>
                        <p class="text-neutral-500">{*text}</p>
                    </div>
                })}
            </div>
            <RegisterButton text="Get Started" />
            <Link<Route> to={Route::ReportSample} classes={SECONDARY_BUTTON}>
                {"See sample report"}
            </Link<Route>>
        </section>
    }
}

#[function_component]
fn SeeAlso() -> Html {
    let cards = [
        (
            "Top Headlines Every Day",
            "We fetch the world's most relevant news and filter for \
             relevance.",
        ),
        (
            "Popularity Insights",
            "We analyze trending topics so you know what's popular \
             nowadays.",
        ),
    ];

    html! {
        <section class="px-3">
            <h1 class="text-2xl font-bold">{"See also"}</h1>
            <div class="flex flex-row overflow-x-auto gap-4 md:grid \
                        md:grid-cols-2 p-5">
                {for cards.iter().map(|(heading, description)| html! {
                    <div
                        key={*heading}
                        class="min-w-[240px] p-6 rounded-2xl border \
                               border-neutral-200 dark:border-neutral-700 \
                               bg-white/40 dark:bg-neutral-800/40"
                    >
                        <h2 class="text-lg font-semibold mb-2">{*heading}</h2>
                        <p class="text-neutral-500">{*description}</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component]
fn SubscribeStrip() -> Html {
    html! {
        <section class="flex flex-col sm:flex-row justify-between gap-4 p-5 \
                        items-center bg-[#F7F7F7] dark:bg-neutral-800 w-full">
            <h1 class="text-xl">
                {"Get Tomorrow's News Digest Direct to Your Mailbox"}
            </h1>
            <div class="flex flex-row sm:pr-8">
                <RegisterButton text="Subscribe" primary=true />
                <Link<Route> to={Route::ReportSample} classes={SECONDARY_BUTTON}>
                    {"Sample Report"}
                </Link<Route>>
            </div>
        </section>
    }
}
