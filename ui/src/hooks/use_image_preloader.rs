use loaders::Lifecycle;
use loaders::preload::{LoadingState, PreloadConfig, Preloader};
use loaders::timer::DefaultTimer;
use payloads::{Article, ArticleId};
use std::rc::Rc;
use yew::prelude::*;

use crate::contexts::use_image_cache;
use crate::image_loader::BrowserImageLoader;

pub enum PreloadAction {
    Begin,
    Settled(ArticleId, bool),
    Finish,
}

/// [`LoadingState`] as a yew reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreloadProgress(pub LoadingState);

impl Reducible for PreloadProgress {
    type Action = PreloadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            PreloadAction::Begin => {
                state.is_loading = true;
                state.error = None;
            }
            PreloadAction::Settled(id, loaded) => state.record(id, loaded),
            PreloadAction::Finish => state.finish(),
        }
        Rc::new(Self(state))
    }
}

/// Preload the thumbnails of `articles` into the nearest image cache.
///
/// Runs again when the list changes. Progress stops being reported once
/// the component unmounts or a newer list replaces this one.
#[hook]
pub fn use_image_preloader(articles: Vec<Article>) -> LoadingState {
    let progress = use_reducer(PreloadProgress::default);
    let cache = use_image_cache();

    {
        let dispatcher = progress.dispatcher();
        use_effect_with(articles, move |articles| {
            let lifecycle = Lifecycle::new();
            let cycle = lifecycle.begin();
            let articles = articles.clone();
            let preloader = Preloader::new(
                BrowserImageLoader,
                DefaultTimer::default(),
                cache,
                PreloadConfig::default(),
            );

            yew::platform::spawn_local(async move {
                cycle.apply(|| dispatcher.dispatch(PreloadAction::Begin));
                preloader
                    .preload_staged(&articles, |id, loaded| {
                        cycle.apply(|| {
                            dispatcher
                                .dispatch(PreloadAction::Settled(id, loaded))
                        });
                    })
                    .await;
                cycle.apply(|| dispatcher.dispatch(PreloadAction::Finish));
            });

            move || lifecycle.unmount()
        });
    }

    progress.0.clone()
}
