use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="w-full bg-neutral-100 dark:bg-neutral-800 \
                       text-neutral-600 dark:text-neutral-400 text-center \
                       py-6 border-t border-neutral-300 \
                       dark:border-neutral-700 mt-auto">
            <div class="flex items-center justify-center gap-6 mb-6">
                <p class="text-sm md:text-lg font-semibold">{"NewsTracker"}</p>
                <Link<Route>
                    to={Route::ReportSample}
                    classes="text-xs md:text-sm hover:underline"
                >
                    {"Sample report"}
                </Link<Route>>
            </div>
            <div class="text-xs">
                {"© 2025 News Tracker. All rights reserved."}
            </div>
        </footer>
    }
}
