use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn AuthFailedPage() -> Html {
    use_title("Authentication failed");

    html! {
        <div class="flex flex-col w-full min-h-screen justify-center \
                    items-center bg-neutral-900">
            <div class="bg-white dark:bg-neutral-800 p-10 rounded-2xl flex \
                        flex-col items-center gap-5 shadow">
                <h1 class="text-4xl text-red-500 font-semibold">
                    {"Authentication Failed"}
                </h1>
                <p class="text-lg text-neutral-500">
                    {"Please check your credentials and try again."}
                </p>
                <Link<Route>
                    to={Route::Login}
                    classes="mt-4 px-4 py-2 border border-neutral-300 rounded"
                >
                    {"Go to Login"}
                </Link<Route>>
            </div>
        </div>
    }
}
