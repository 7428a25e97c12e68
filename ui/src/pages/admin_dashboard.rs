use loaders::gate::AdminAccess;
use payloads::Metric;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{AdminActions, RecentActivity, StatCard};
use crate::hooks::{use_admin_gate, use_admin_metrics, use_title};

#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title("Admin Dashboard");

    match use_admin_gate() {
        Some(AdminAccess::Granted) => html! { <Dashboard /> },
        // a denial is on its way to /auth-failed
        None | Some(AdminAccess::Denied) => html! {
            <div class="h-screen w-screen flex items-center justify-center">
                {"Checking authentication…"}
            </div>
        },
    }
}

#[function_component]
fn Dashboard() -> Html {
    html! {
        <main class="min-h-screen w-full flex flex-col">
            <header class="flex items-center justify-between px-6 py-4 \
                           border-b border-neutral-200 dark:border-neutral-700">
                <Link<Route>
                    to={Route::Home}
                    classes="text-xl font-semibold tracking-tight"
                >
                    {"Admin Dashboard"}
                </Link<Route>>
                <div class="flex items-center gap-3 text-sm text-neutral-500">
                    <span class="hidden sm:inline">{"System Healthy"}</span>
                    <span
                        class="w-2 h-2 rounded-full bg-green-500 inline-block"
                        aria-label="system healthy"
                    />
                </div>
            </header>

            <div class="flex-1 w-full max-w-7xl mx-auto px-6 py-8 flex \
                        flex-col gap-8">
                <Metrics />
                <div class="grid gap-6 grid-cols-1 lg:grid-cols-3">
                    <div class="lg:col-span-2">
                        <RecentActivity />
                    </div>
                    <AdminActions />
                </div>
            </div>
        </main>
    }
}

#[function_component]
fn Metrics() -> Html {
    let metrics = use_admin_metrics();

    html! {
        <section aria-labelledby="stats-heading">
            <h2 id="stats-heading" class="sr-only">{"Key Metrics"}</h2>
            {metrics.render("admin metrics", |metrics, _, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="mb-2 text-sm text-red-600">{error}</p>
                    }
                    <div class="grid gap-4 grid-cols-1 sm:grid-cols-2 \
                                xl:grid-cols-3">
                        {for Metric::ALL.iter().map(|metric| html! {
                            <StatCard
                                key={metric.label()}
                                metric={*metric}
                                stat={metrics.get(*metric).cloned()}
                            />
                        })}
                    </div>
                </>
            })}
        </section>
    }
}
