use payloads::APIClient;
use std::sync::Arc;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod image_loader;
mod logs;
mod pages;
mod state;
mod storage;
mod utils;

pub use state::State;
pub use storage::LocalStorageTokens;

use pages::{
    AdminDashboardPage, AuthFailedPage, LandingPage, LoginPage, NewsPage,
    NotFoundPage, RegisterPage, ReportSamplePage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| {
            // Fallback to the API mounted under the serving origin
            let window = web_sys::window().unwrap();
            let location = window.location();
            format!("{}/api", location.origin().unwrap())
        });

    APIClient::new(address, Arc::new(LocalStorageTokens))
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();

    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-neutral-900 \
                        text-neutral-900 dark:text-neutral-100">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/news")]
    News,
    #[at("/report-sample")]
    ReportSample,
    #[at("/register")]
    Register,
    #[at("/login")]
    Login,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/auth-failed")]
    AuthFailed,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <LandingPage /> },
        Route::News => html! { <NewsPage /> },
        Route::ReportSample => html! { <ReportSamplePage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::AuthFailed => html! { <AuthFailedPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
