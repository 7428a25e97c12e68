use loaders::activity::fetch_activity;
use payloads::responses::RecentActivities;
use yew::prelude::*;

use super::{ResourceHookReturn, use_resource};

#[hook]
pub fn use_recent_activity() -> ResourceHookReturn<RecentActivities> {
    use_resource(|client, cancel| async move {
        fetch_activity(&client, &cancel).await
    })
}
