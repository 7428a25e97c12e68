use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::layout::MainLayout;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <MainLayout>
            <div class="text-center py-16 space-y-4">
                <h1 class="text-4xl font-bold">{"404"}</h1>
                <p class="text-neutral-600 dark:text-neutral-300">
                    {"Page not found"}
                </p>
                <Link<Route> to={Route::Home} classes="underline">
                    {"Back to the news"}
                </Link<Route>>
            </div>
        </MainLayout>
    }
}
