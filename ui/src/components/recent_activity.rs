use payloads::responses::Activity;
use yew::prelude::*;

use crate::hooks::use_recent_activity;
use crate::utils::time::format_activity_time;

#[function_component]
pub fn RecentActivity() -> Html {
    let activity = use_recent_activity();

    html! {
        <div class="h-full w-full rounded-lg border border-neutral-200 \
                    dark:border-neutral-700 p-4 shadow flex flex-col gap-3">
            <h2 class="text-sm font-semibold">{"Recent Activity"}</h2>
            {activity.render("recent activity", |recent, _, error| html! {
                <>
                    if let Some(error) = error {
                        <p class="text-xs text-red-600">{error}</p>
                    }
                    if recent.activities.is_empty() {
                        <p class="text-sm text-neutral-500">
                            {"No activity yet"}
                        </p>
                    } else {
                        <ul class="text-sm text-neutral-600 \
                                   dark:text-neutral-400 space-y-2">
                            {for recent.activities.iter().map(activity_row)}
                        </ul>
                    }
                </>
            })}
        </div>
    }
}

fn activity_row(activity: &Activity) -> Html {
    html! {
        <li key={activity.id.to_string()} class="flex justify-between gap-4">
            <span>{&activity.description}</span>
            if let Some(at) = activity.occurred_at {
                <span class="text-xs text-neutral-400 whitespace-nowrap">
                    {format_activity_time(at)}
                </span>
            }
        </li>
    }
}
