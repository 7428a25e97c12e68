use yew::prelude::*;

use crate::components::{EmailForm, EmailFormKind};

const BUTTON_CLASS: &str = "px-4 py-2 text-sm rounded-md shadow \
                            focus:outline-none focus:ring-2";

/// Switches between the two admin forms. Both stay mounted so a half typed
/// address survives switching.
#[function_component]
pub fn AdminActions() -> Html {
    let active = use_state(|| EmailFormKind::RegisterAdmin);

    let select = |kind: EmailFormKind, text: &'static str| {
        let active = active.clone();
        let selected = *active == kind;
        html! {
            <button
                class={classes!(
                    BUTTON_CLASS,
                    if selected {
                        "bg-neutral-900 text-white"
                    } else {
                        "bg-neutral-100 dark:bg-neutral-800"
                    },
                )}
                onclick={Callback::from(move |_: MouseEvent| active.set(kind))}
            >
                {text}
            </button>
        }
    };

    html! {
        <div class="flex flex-col gap-6">
            <div class="h-fit w-full rounded-lg border border-neutral-200 \
                        dark:border-neutral-700 p-5 shadow flex flex-col gap-4">
                <h2 class="text-sm font-semibold">{"Admin Actions"}</h2>
                <div class="flex flex-wrap gap-3">
                    {select(EmailFormKind::RegisterAdmin, "Register Admin")}
                    {select(EmailFormKind::EmailRecipient, "Add Email Recipient")}
                </div>
            </div>
            <EmailForm
                kind={EmailFormKind::RegisterAdmin}
                active={*active == EmailFormKind::RegisterAdmin}
            />
            <EmailForm
                kind={EmailFormKind::EmailRecipient}
                active={*active == EmailFormKind::EmailRecipient}
            />
        </div>
    }
}
