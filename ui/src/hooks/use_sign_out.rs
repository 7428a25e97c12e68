use crate::{Route, State};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[hook]
pub fn use_sign_out() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        loaders::auth::sign_out(&crate::get_api_client());
        dispatch.reduce_mut(|state| state.signed_in = false);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    })
}
