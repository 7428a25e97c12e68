use payloads::Article;
use yew::prelude::*;

use crate::utils::format::interest;

#[derive(Properties, PartialEq)]
pub struct NewsReportProps {
    pub articles: Vec<Article>,
}

/// An article list laid out like the daily digest email.
#[function_component]
pub fn NewsReport(props: &NewsReportProps) -> Html {
    html! {
        <div class="p-8 md:p-20 bg-neutral-100 dark:bg-neutral-800 min-h-full \
                    flex flex-col gap-5 justify-center">
            <h2 class="text-[#004080] text-xl">{"📊 News Update"}</h2>
            {for props.articles.iter().map(|article| html! {
                <div key={article.id.to_string()} class="mb-5">
                    <h3 class="text-[#333] dark:text-neutral-100 font-semibold">
                        {&article.headline}
                    </h3>
                    <p class="text-[#555] dark:text-neutral-300">
                        {&article.summary}
                    </p>
                    <p class="text-xs text-neutral-500">
                        {format!(
                            "Peak Interest: {} | Current Interest: {}",
                            interest(article.peak_interest),
                            interest(article.current_interest),
                        )}
                    </p>
                    <a
                        href={article.url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue-500"
                    >
                        {"Read more"}
                    </a>
                </div>
            })}
        </div>
    }
}
