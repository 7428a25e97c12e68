use loaders::preload::ImageCache;
use web_sys::HtmlImageElement;
use yew::prelude::*;

pub type ThumbnailCache = ImageCache<HtmlImageElement>;

#[derive(Properties, PartialEq)]
pub struct ImageCacheProviderProps {
    pub children: Children,
}

/// Owns the thumbnail cache of one page. Lists rendered inside share it, so
/// an image is requested at most once while the page is shown.
#[function_component]
pub fn ImageCacheProvider(props: &ImageCacheProviderProps) -> Html {
    let cache = use_memo((), |_| ThumbnailCache::new());

    html! {
        <ContextProvider<ThumbnailCache> context={(*cache).clone()}>
            {props.children.clone()}
        </ContextProvider<ThumbnailCache>>
    }
}

/// The nearest provided cache, or one private to the calling component.
#[hook]
pub fn use_image_cache() -> ThumbnailCache {
    let own = use_memo((), |_| ThumbnailCache::new());
    use_context::<ThumbnailCache>().unwrap_or_else(|| (*own).clone())
}
