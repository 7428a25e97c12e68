use payloads::{Metric, Stat};
use yew::prelude::*;

use crate::utils::format::signed_percent;

#[derive(Clone, Copy, PartialEq)]
enum Period {
    Week,
    Day,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub metric: Metric,
    /// `None` when the metric's endpoint failed.
    pub stat: Option<Stat>,
}

/// One dashboard metric. The 7-day view shows the weekly value and its
/// change; the 1-day view the daily value.
#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    let period = use_state(|| Period::Day);

    let toggle = |target: Period, text: &'static str| {
        let period = period.clone();
        let active = *period == target;
        html! {
            <button
                class={classes!(
                    "text-xs", "p-2", "border", "rounded-xl",
                    "border-black/30",
                    active.then_some("bg-black text-white"),
                )}
                onclick={Callback::from(move |_: MouseEvent| period.set(target))}
            >
                {text}
            </button>
        }
    };

    let label = props
        .stat
        .as_ref()
        .map(|stat| stat.label.clone())
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| props.metric.label().to_string());

    let (value, diff) = match (&props.stat, *period) {
        (None, _) => ("—".to_string(), None),
        (Some(stat), Period::Day) => (stat.value_daily.to_string(), None),
        (Some(stat), Period::Week) => (
            stat.value_weekly
                .as_ref()
                .map_or_else(|| "—".to_string(), ToString::to_string),
            stat.diff,
        ),
    };

    html! {
        <div class="h-full w-full rounded-lg border border-neutral-200 \
                    dark:border-neutral-700 bg-white dark:bg-neutral-800 p-4 \
                    shadow flex flex-col gap-1">
            <span class="text-xs uppercase tracking-wide text-neutral-500">
                {label}
            </span>
            <div class="flex gap-2">
                {toggle(Period::Week, "7 Days")}
                {toggle(Period::Day, "1 Day")}
            </div>
            <span class="text-2xl font-semibold">{value}</span>
            if let Some(diff) = diff {
                <span class={classes!(
                    "text-xs", "font-medium",
                    if diff >= 0.0 { "text-green-600" } else { "text-red-600" },
                )}>
                    {signed_percent(diff)}
                </span>
            }
        </div>
    }
}
