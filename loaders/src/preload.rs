//! Out-of-band thumbnail loading for news lists.
//!
//! The first few thumbnails start loading straight away and the rest shortly
//! after, so above-the-fold images are not competing with the whole list.
//! Every image gets one attempt per [`ImageCache`]: the outcome is cached
//! for the cache's lifetime and concurrent requests for the same article
//! share the in-flight attempt.

use crate::timer::Timer;
use futures::future::{self, Either, LocalBoxFuture, Shared};
use futures::FutureExt;
use payloads::{Article, ArticleId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("failed to load {0}")]
    Failed(String),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

/// Something that can fetch and decode an image.
pub trait ImageLoader: Clone + 'static {
    type Handle: Clone + 'static;

    /// Start loading `url`. Dropping the returned future abandons the load
    /// and releases whatever it was listening on.
    fn load(
        &self,
        url: &str,
    ) -> LocalBoxFuture<'static, Result<Self::Handle, ImageError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<H> {
    pub loaded: bool,
    pub image: Option<H>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadConfig {
    /// How many leading articles load without delay.
    pub critical_count: usize,
    pub deferred_delay: Duration,
    /// An image still loading after this long counts as failed.
    pub image_timeout: Duration,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            critical_count: 5,
            deferred_delay: Duration::from_millis(500),
            image_timeout: Duration::from_secs(10),
        }
    }
}

type Attempt = Shared<LocalBoxFuture<'static, bool>>;

/// Images loaded so far, keyed by article. Entries are never evicted.
///
/// Clones share the same cache; a view creates one and hands it to its
/// children.
pub struct ImageCache<H> {
    inner: Rc<RefCell<CacheState<H>>>,
}

struct CacheState<H> {
    entries: HashMap<ArticleId, CacheEntry<H>>,
    in_flight: HashMap<ArticleId, Attempt>,
}

impl<H> Clone for ImageCache<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H> PartialEq for ImageCache<H> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<H> Default for ImageCache<H> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(CacheState {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
            })),
        }
    }
}

impl<H: Clone> ImageCache<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ArticleId) -> Option<CacheEntry<H>> {
        self.inner.borrow().entries.get(&id).cloned()
    }

    /// The decoded image for `id`, if it loaded.
    pub fn image(&self, id: ArticleId) -> Option<H> {
        self.get(id).and_then(|entry| entry.image)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn settle(&self, id: ArticleId, entry: CacheEntry<H>) {
        let mut state = self.inner.borrow_mut();
        state.in_flight.remove(&id);
        state.entries.insert(id, entry);
    }
}

/// Progress of preloading one list, as shown by the owning view.
///
/// An article id is in at most one of `images_loaded` and `failed_images`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub images_loaded: HashSet<ArticleId>,
    pub failed_images: HashSet<ArticleId>,
}

impl LoadingState {
    pub fn record(&mut self, id: ArticleId, loaded: bool) {
        if loaded {
            self.failed_images.remove(&id);
            self.images_loaded.insert(id);
        } else {
            self.images_loaded.remove(&id);
            self.failed_images.insert(id);
        }
    }

    /// Mark the run as finished. Only a run where every image failed is an
    /// error.
    pub fn finish(&mut self) {
        self.is_loading = false;
        let all_failed =
            self.images_loaded.is_empty() && !self.failed_images.is_empty();
        self.error = all_failed.then(|| "Failed to load images".to_string());
    }
}

pub struct Preloader<L: ImageLoader, T: Timer> {
    loader: L,
    timer: T,
    cache: ImageCache<L::Handle>,
    config: PreloadConfig,
}

impl<L: ImageLoader, T: Timer> Preloader<L, T> {
    pub fn new(
        loader: L,
        timer: T,
        cache: ImageCache<L::Handle>,
        config: PreloadConfig,
    ) -> Self {
        Self {
            loader,
            timer,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &ImageCache<L::Handle> {
        &self.cache
    }

    /// Load one image, or reuse the cached or in-flight attempt for `id`.
    /// Resolves to whether the image loaded.
    pub async fn preload_one(&self, id: ArticleId, url: &str) -> bool {
        let attempt = {
            let mut state = self.cache.inner.borrow_mut();
            if let Some(entry) = state.entries.get(&id) {
                return entry.loaded;
            }
            state
                .in_flight
                .entry(id)
                .or_insert_with(|| self.attempt(id, url))
                .clone()
        };
        attempt.await
    }

    fn attempt(&self, id: ArticleId, url: &str) -> Attempt {
        let load = self.loader.load(url);
        let timeout = self.config.image_timeout;
        let expiry = self.timer.sleep(timeout);
        let cache = self.cache.clone();

        async move {
            // whichever finishes first wins; the other is dropped here
            let outcome = match future::select(load, expiry).await {
                Either::Left((outcome, _)) => outcome,
                Either::Right(((), _)) => Err(ImageError::TimedOut(timeout)),
            };
            let image = match outcome {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::debug!("thumbnail of article {id}: {e}");
                    None
                }
            };
            let loaded = image.is_some();
            cache.settle(id, CacheEntry { loaded, image });
            loaded
        }
        .boxed_local()
        .shared()
    }

    /// Load the thumbnails of `articles` concurrently and wait for all of
    /// them to settle. Articles without a thumbnail are skipped.
    pub async fn preload_images(
        &self,
        articles: &[Article],
    ) -> HashMap<ArticleId, bool> {
        let attempts = thumbnails(articles)
            .map(|(id, url)| async move {
                (id, self.preload_one(id, url).await)
            });
        future::join_all(attempts).await.into_iter().collect()
    }

    /// Preload in two batches: the leading `critical_count` articles now,
    /// the rest after `deferred_delay`. `on_settled` is told about every
    /// image as soon as its attempt settles.
    pub async fn preload_staged(
        &self,
        articles: &[Article],
        on_settled: impl FnMut(ArticleId, bool),
    ) {
        let split = self.config.critical_count.min(articles.len());
        let (critical, remaining) = articles.split_at(split);
        let on_settled = RefCell::new(on_settled);
        let report = |id: ArticleId, loaded: bool| {
            (*on_settled.borrow_mut())(id, loaded)
        };

        let deferred = async {
            if thumbnails(remaining).next().is_none() {
                return;
            }
            self.timer.sleep(self.config.deferred_delay).await;
            self.preload_batch(remaining, &report).await;
        };

        future::join(self.preload_batch(critical, &report), deferred).await;
    }

    async fn preload_batch(
        &self,
        articles: &[Article],
        report: &impl Fn(ArticleId, bool),
    ) {
        let attempts = thumbnails(articles).map(|(id, url)| async move {
            let loaded = self.preload_one(id, url).await;
            report(id, loaded);
        });
        future::join_all(attempts).await;
    }
}

fn thumbnails(articles: &[Article]) -> impl Iterator<Item = (ArticleId, &str)> {
    articles
        .iter()
        .filter_map(|a| a.thumbnail.as_deref().map(|url| (a.id, url)))
}
