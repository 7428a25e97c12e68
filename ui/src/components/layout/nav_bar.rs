use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_sign_out;
use crate::{Route, State};

const LINK_CLASS: &str = "text-neutral-500 dark:text-neutral-400 text-base \
                          px-2 py-1 rounded hover:bg-neutral-900 \
                          hover:text-white transition";

#[function_component]
pub fn NavBar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="w-full flex flex-col sm:flex-row items-center p-4 \
                    bg-white dark:bg-neutral-900 relative">
            <div class="w-full flex items-center justify-between \
                        sm:justify-start">
                <Link<Route> to={Route::Home} classes="text-sm sm:text-xl">
                    {"NewsTracker"}
                </Link<Route>>
                <button
                    class="sm:hidden p-2 focus:outline-none"
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    {if *menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <div class="hidden sm:flex items-center gap-6 ml-auto">
                <NavLinks />
            </div>

            if *menu_open {
                <div class="sm:hidden absolute top-full left-0 w-full z-10 \
                            bg-white dark:bg-neutral-900 shadow-md flex \
                            flex-col items-center gap-2 py-4">
                    <NavLinks />
                </div>
            }
        </nav>
    }
}

#[function_component]
fn NavLinks() -> Html {
    let (state, _) = use_store::<State>();
    let sign_out = use_sign_out();

    html! {
        <>
            <Link<Route> to={Route::News} classes={LINK_CLASS}>
                {"News"}
            </Link<Route>>
            if state.signed_in {
                <Link<Route> to={Route::AdminDashboard} classes={LINK_CLASS}>
                    {"Dashboard"}
                </Link<Route>>
                <button onclick={sign_out} class={LINK_CLASS}>
                    {"Sign out"}
                </button>
            } else {
                <RegisterButton />
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegisterButtonProps {
    #[prop_or_else(|| AttrValue::from("Register"))]
    pub text: AttrValue,
    #[prop_or_default]
    pub primary: bool,
}

#[function_component]
pub fn RegisterButton(props: &RegisterButtonProps) -> Html {
    let classes = if props.primary {
        "bg-neutral-900 text-white hover:bg-neutral-700"
    } else {
        "border border-neutral-900 dark:border-neutral-100 \
         hover:bg-neutral-900 hover:text-white"
    };

    html! {
        <Link<Route>
            to={Route::Register}
            classes={classes!("inline-block", "text-sm", "px-4", "py-2",
                              "rounded-sm", "transition", classes)}
        >
            {props.text.clone()}
        </Link<Route>>
    }
}
