use payloads::Article;
use yew::prelude::*;

use crate::components::NewsCard;
use crate::contexts::use_image_cache;
use crate::hooks::use_image_preloader;

#[derive(Properties, PartialEq)]
pub struct NewsListProps {
    pub articles: Vec<Article>,
    #[prop_or_else(|| AttrValue::from("flex flex-col md:grid md:grid-cols-2 lg:p-10"))]
    pub class: AttrValue,
}

/// Cards for `articles`, each showing its thumbnail once preloaded.
#[function_component]
pub fn NewsList(props: &NewsListProps) -> Html {
    let loading = use_image_preloader(props.articles.clone());
    let cache = use_image_cache();

    let cards = props.articles.iter().map(|article| {
        let thumbnail_ready = loading.images_loaded.contains(&article.id)
            || cache.image(article.id).is_some();
        html! {
            <NewsCard
                key={article.id.to_string()}
                article={article.clone()}
                {thumbnail_ready}
            />
        }
    });

    html! {
        <div class={props.class.clone()}>
            {for cards}
            if let Some(error) = &loading.error {
                <p class="col-span-full text-sm text-neutral-500 px-5">
                    {error}
                </p>
            }
        </div>
    }
}
