use loaders::auth::google_authorize_url;
use yew::prelude::*;

use crate::Route;
use yew_router::Routable;

/// OAuth client id, set at build time.
const GOOGLE_CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");

/// "Continue with Google". Sends the browser to Google's consent screen,
/// which redirects back to the login page with an authorization code.
#[function_component]
pub fn GoogleSignIn() -> Html {
    let Some(client_id) = GOOGLE_CLIENT_ID else {
        return html! {
            <div class="flex flex-col items-center gap-2">
                <button
                    disabled=true
                    class="w-full px-4 py-2 rounded-md border \
                           border-neutral-300 opacity-60 cursor-not-allowed"
                >
                    {"Continue with Google"}
                </button>
                <p class="text-xs text-neutral-500">
                    {"Google sign-in is not configured for this build."}
                </p>
            </div>
        };
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        let location = web_sys::window().unwrap().location();
        let Ok(origin) = location.origin() else {
            tracing::error!("page origin unavailable");
            return;
        };
        let redirect_uri = format!("{origin}{}", Route::Login.to_path());
        match google_authorize_url(client_id, &redirect_uri) {
            Ok(url) => {
                if location.set_href(url.as_str()).is_err() {
                    tracing::error!("failed to leave for Google sign-in");
                }
            }
            Err(e) => tracing::error!("{e}"),
        }
    });

    html! {
        <button
            {onclick}
            class="w-full flex items-center justify-center gap-3 px-4 py-2 \
                   rounded-md border border-neutral-300 bg-white text-black \
                   hover:bg-neutral-100 shadow-sm"
        >
            <span class="font-bold text-blue-600">{"G"}</span>
            {"Continue with Google"}
        </button>
    }
}
