use loaders::auth::{authorization_code, exchange_code};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::GoogleSignIn;
use crate::components::layout::TitleBar;
use crate::hooks::use_title;
use crate::{Route, State};

#[derive(Clone, PartialEq)]
enum Exchange {
    Idle,
    Pending,
    Failed(String),
}

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Login");
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();
    let exchange = use_state(|| Exchange::Idle);

    // Google redirects back here with ?code=...
    {
        let exchange = exchange.clone();
        use_effect_with((), move |_| {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if let Some(code) = authorization_code(&search) {
                exchange.set(Exchange::Pending);
                yew::platform::spawn_local(async move {
                    let client = crate::get_api_client();
                    match exchange_code(&client, &code).await {
                        Ok(()) => {
                            dispatch.reduce_mut(|state| state.signed_in = true);
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Home);
                            }
                        }
                        Err(e) => {
                            tracing::warn!("sign-in failed: {e}");
                            exchange.set(Exchange::Failed(e.to_string()));
                        }
                    }
                });
            }
        });
    }

    html! {
        <SignInCard
            title="Login"
            description="Welcome back! Please login with your Google account."
        >
            {match &*exchange {
                Exchange::Idle => html! { <GoogleSignIn /> },
                Exchange::Pending => html! {
                    <p class="text-sm text-neutral-500">{"Signing in..."}</p>
                },
                Exchange::Failed(error) => html! {
                    <>
                        <p class="text-sm text-red-600">{error}</p>
                        <GoogleSignIn />
                    </>
                },
            }}
            <div class="mt-4 text-sm text-neutral-500">
                {"Don't have an account? "}
                <Link<Route>
                    to={Route::Register}
                    classes="text-black font-semibold hover:underline"
                >
                    {"Register"}
                </Link<Route>>
            </div>
        </SignInCard>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignInCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub children: Children,
}

/// Centered card shared by the login and register pages.
#[function_component]
pub fn SignInCard(props: &SignInCardProps) -> Html {
    html! {
        <div>
            <TitleBar />
            <div class="min-h-screen w-full flex pt-20 items-baseline \
                        md:items-center md:pt-0 justify-center bg-neutral-50">
                <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-8 \
                            flex flex-col items-center gap-4 text-black">
                    <h1 class="text-2xl font-bold mb-2">{&props.title}</h1>
                    <p class="mb-6 text-neutral-500 text-sm">
                        {&props.description}
                    </p>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
