use loaders::metrics::{AdminMetrics, fetch_metrics};
use yew::prelude::*;

use super::{ResourceHookReturn, use_resource};

#[hook]
pub fn use_admin_metrics() -> ResourceHookReturn<AdminMetrics> {
    use_resource(|client, cancel| async move {
        fetch_metrics(&client, &cancel).await
    })
}
