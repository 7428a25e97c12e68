use loaders::Lifecycle;
use loaders::gate::{AdminAccess, GateConfig, guard_admin};
use loaders::timer::DefaultTimer;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Check admin access on mount and every hour after. Returns `None` until
/// the first answer; a denial replaces the current page with
/// [`Route::AuthFailed`].
#[hook]
pub fn use_admin_gate() -> Option<AdminAccess> {
    let access = use_state(|| None::<AdminAccess>);
    let navigator = use_navigator();

    {
        let access = access.clone();
        use_effect_with((), move |_| {
            let lifecycle = Lifecycle::new();
            {
                let lifecycle = lifecycle.clone();
                yew::platform::spawn_local(async move {
                    let client = crate::get_api_client();
                    guard_admin(
                        &client,
                        &lifecycle,
                        &DefaultTimer::default(),
                        GateConfig::default(),
                        |answer| {
                            access.set(Some(answer));
                            if answer == AdminAccess::Denied {
                                if let Some(navigator) = &navigator {
                                    navigator.replace(&Route::AuthFailed);
                                }
                            }
                        },
                    )
                    .await;
                });
            }
            move || lifecycle.unmount()
        });
    }

    *access
}
