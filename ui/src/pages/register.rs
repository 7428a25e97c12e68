use yew::prelude::*;
use yew_router::prelude::*;

use super::login::SignInCard;
use crate::Route;
use crate::components::GoogleSignIn;
use crate::hooks::use_title;

#[function_component]
pub fn RegisterPage() -> Html {
    use_title("Register");

    html! {
        <SignInCard
            title="Register"
            description="Create your account with Google."
        >
            <GoogleSignIn />
            <div class="mt-4 text-sm text-neutral-500">
                {"Already have an account? "}
                <Link<Route>
                    to={Route::Login}
                    classes="text-black font-semibold hover:underline"
                >
                    {"Login"}
                </Link<Route>>
            </div>
        </SignInCard>
    }
}
