use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Minimal header for the sign-in pages.
#[function_component]
pub fn TitleBar() -> Html {
    html! {
        <div class="w-full fixed top-0 z-50 bg-gradient-to-r from-neutral-50 \
                    via-neutral-300 to-neutral-200 shadow-md flex \
                    items-center justify-center py-4 px-6">
            <Link<Route> to={Route::Home} classes="flex items-center gap-3">
                <span class="text-2xl sm:text-3xl font-light tracking-tight \
                             text-black">
                    {"NewsTracker"}
                </span>
            </Link<Route>>
        </div>
    }
}
