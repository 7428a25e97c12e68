use yew::prelude::*;

use crate::components::NewsList;
use crate::components::layout::MainLayout;
use crate::contexts::ImageCacheProvider;
use crate::hooks::{RetryButton, use_news_report, use_title};

#[function_component]
pub fn NewsPage() -> Html {
    use_title("News");

    html! {
        <ImageCacheProvider>
            <MainLayout>
                <Explore />
            </MainLayout>
        </ImageCacheProvider>
    }
}

#[function_component]
fn Explore() -> Html {
    let news = use_news_report();
    let retry = news.retry.clone();

    html! {
        <section>
            <h1 class="text-3xl font-bold ml-5 md:ml-10">{"Explore"}</h1>
            {news.render("news", move |feed, is_loading, error| html! {
                <>
                    if let Some(error) = error {
                        <div class="mx-5 md:mx-10 mt-4 p-3 rounded-md \
                                    bg-amber-50 dark:bg-amber-900/20 flex \
                                    items-center justify-between gap-4">
                            <p class="text-sm text-amber-800 \
                                      dark:text-amber-300">
                                {format!("{error}. Showing a sample report.")}
                            </p>
                            <RetryButton retry={retry.clone()} />
                        </div>
                    }
                    if is_loading {
                        <p class="mx-5 md:mx-10 text-sm text-neutral-500">
                            {"Refreshing..."}
                        </p>
                    }
                    if feed.0.is_empty() {
                        <p class="text-center py-12 text-neutral-500">
                            {"No news yet"}
                        </p>
                    } else {
                        <NewsList articles={feed.0.clone()} />
                    }
                </>
            })}
        </section>
    }
}
