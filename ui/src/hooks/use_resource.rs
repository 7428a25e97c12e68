use loaders::{FetchError, Lifecycle, Resource, ResourceState, Transition, load};
use payloads::{APIClient, CancelToken};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// [`ResourceState`] as a yew reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T>(pub ResourceState<T>);

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self(ResourceState::default())
    }
}

impl<T: Resource + Clone> Reducible for ResourceStore<T> {
    type Action = Transition<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().reduce(action)))
    }
}

/// Resource hook return type
pub struct ResourceHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Re-run the fetch in a new cycle. Any fetch still in flight is
    /// cancelled.
    pub retry: Callback<()>,
}

impl<T> ResourceHookReturn<T> {
    /// Render based on resource state with a contextual loading message.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: the error with a retry button
    /// - Has data: `render_fn(data, is_loading, error)`, where `error` is
    ///   either a warning about incomplete data or the error of a failed
    ///   refetch (the previous data is still shown)
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match &self.data {
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
            None if self.is_loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
            None => html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800 \
                            flex items-center justify-between">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {self.error.clone().unwrap_or_default()}
                    </p>
                    <RetryButton retry={self.retry.clone()} />
                </div>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RetryButtonProps {
    pub retry: Callback<()>,
}

#[function_component]
pub fn RetryButton(props: &RetryButtonProps) -> Html {
    let onclick = props.retry.reform(|_: MouseEvent| ());
    html! {
        <button
            {onclick}
            class="text-sm font-medium text-red-700 dark:text-red-400 \
                   underline hover:no-underline"
        >
            {"Retry"}
        </button>
    }
}

/// Generic fetch-on-mount hook for a [`Resource`].
///
/// Fetches when the component mounts and again whenever `retry` is
/// emitted. Each run is a new cycle of the component's [`Lifecycle`], so a
/// late answer from a superseded run, or one arriving after unmount, never
/// reaches the state. Unmounting cancels the request in flight.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_news_report() -> ResourceHookReturn<NewsFeed> {
///     use_resource(|client, cancel| async move {
///         fetch_news(&client, &cancel).await
///     })
/// }
/// ```
#[hook]
pub fn use_resource<T, F, Fut>(fetch: F) -> ResourceHookReturn<T>
where
    T: Resource + Clone + 'static,
    F: FnOnce(APIClient, CancelToken) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let store = use_reducer(ResourceStore::<T>::default);
    let lifecycle = use_memo((), |_| Lifecycle::new());
    let retries = use_state(|| 0_u32);

    {
        let lifecycle = lifecycle.clone();
        use_effect_with((), move |_| move || lifecycle.unmount());
    }

    {
        let lifecycle = lifecycle.clone();
        let dispatcher = store.dispatcher();
        use_effect_with(*retries, move |_| {
            let cycle = lifecycle.begin();
            yew::platform::spawn_local(async move {
                let client = crate::get_api_client();
                let request = fetch(client, cycle.token().clone());
                load(&cycle, request, |transition| {
                    dispatcher.dispatch(transition)
                })
                .await;
            });
        });
    }

    let retry = Callback::from(move |_| retries.set(*retries + 1));
    let ResourceState { data, error, .. } = store.0.clone();
    ResourceHookReturn {
        data,
        is_loading: store.0.is_loading(),
        error,
        retry,
    }
}
