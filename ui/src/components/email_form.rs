use jiff::Timestamp;
use jiff::civil;
use loaders::submit::{FormState, SubmitOutcome, submit};
use payloads::requests::{AdminConfig, RegisterAdmin, SUMMARY_SEND_TIMES};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// The admin forms that take an email address.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum EmailFormKind {
    /// POST `/admin`: promote a user to admin.
    RegisterAdmin,
    /// POST `/admin/admin-config`: add a recipient of the daily digest.
    EmailRecipient,
}

impl EmailFormKind {
    fn title(&self) -> &'static str {
        match self {
            Self::RegisterAdmin => "Register Admin",
            Self::EmailRecipient => "Add Email Recipient",
        }
    }

    fn submit_text(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (Self::RegisterAdmin, false) => "Register",
            (Self::RegisterAdmin, true) => "Registering…",
            (Self::EmailRecipient, false) => "Send",
            (Self::EmailRecipient, true) => "Sending…",
        }
    }
}

pub enum FormAction {
    Edit(String),
    Start,
    Settle(SubmitOutcome),
}

/// [`FormState`] as a yew reducer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormStore(pub FormState);

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Edit(input) => form.edit(input),
            FormAction::Start => {
                form.start();
            }
            FormAction::Settle(outcome) => form.settle(outcome),
        }
        Rc::new(Self(form))
    }
}

#[derive(Properties, PartialEq)]
pub struct EmailFormProps {
    pub kind: EmailFormKind,
    /// Inactive forms stay mounted but hidden, keeping their input.
    #[prop_or(true)]
    pub active: bool,
}

#[function_component]
pub fn EmailForm(props: &EmailFormProps) -> Html {
    let form = use_reducer(FormStore::default);
    let send_time = use_state(|| SUMMARY_SEND_TIMES[0]);
    let kind = props.kind;
    let input_id = match kind {
        EmailFormKind::RegisterAdmin => "register-admin-email",
        EmailFormKind::EmailRecipient => "email-recipient",
    };

    let oninput = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(input.value()));
        })
    };

    let onchange_time = {
        let send_time = send_time.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(time) = select
                .value()
                .parse::<usize>()
                .ok()
                .and_then(|i| SUMMARY_SEND_TIMES.get(i))
            {
                send_time.set(*time);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let send_time = *send_time;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.0.submitting {
                return;
            }
            let email = form.0.input.clone();
            form.dispatch(FormAction::Start);

            let form = form.dispatcher();
            yew::platform::spawn_local(async move {
                let outcome = send(kind, &email, send_time).await;
                form.dispatch(FormAction::Settle(outcome));
            });
        })
    };

    let FormState {
        input,
        submitting,
        outcome,
    } = form.0.clone();

    html! {
        <form
            {onsubmit}
            novalidate=true
            class={classes!(
                "w-full", "max-w-md", "p-4", "rounded-xl", "border",
                "border-neutral-200", "dark:border-neutral-700",
                (!props.active).then_some("hidden"),
            )}
        >
            <label for={input_id} class="block text-sm font-medium mb-2">
                {kind.title()}
            </label>
            <div class="flex flex-col gap-3">
                <div class="flex items-center gap-2">
                    <input
                        id={input_id}
                        name="email"
                        type="email"
                        value={input}
                        {oninput}
                        placeholder="email@example.com"
                        aria-invalid={outcome.as_ref()
                            .is_some_and(|o| !o.is_success())
                            .to_string()}
                        class="flex-1 px-3 py-2 rounded-md border \
                               border-neutral-300 dark:border-neutral-600 \
                               bg-white dark:bg-neutral-800 \
                               focus:outline-none focus:ring-2"
                    />
                    <button
                        type="submit"
                        disabled={submitting}
                        class="inline-flex items-center px-4 py-2 rounded-md \
                               bg-neutral-900 text-white text-sm font-medium \
                               hover:bg-neutral-700 disabled:opacity-60 \
                               disabled:cursor-not-allowed"
                    >
                        {kind.submit_text(submitting)}
                    </button>
                </div>
                if kind == EmailFormKind::EmailRecipient {
                    <SendTimeSelect
                        selected={*send_time}
                        onchange={onchange_time}
                    />
                }
            </div>
            if let Some(outcome) = outcome {
                <p class={classes!(
                    "mt-2", "text-sm",
                    if outcome.is_success() {
                        "text-green-600"
                    } else {
                        "text-red-600"
                    },
                )}>
                    {outcome.message()}
                </p>
            }
        </form>
    }
}

async fn send(
    kind: EmailFormKind,
    email: &str,
    summary_send_time: civil::Time,
) -> SubmitOutcome {
    let client = crate::get_api_client();
    let client = &client;
    match kind {
        EmailFormKind::RegisterAdmin => {
            submit(email, |email| async move {
                client.register_admin(&RegisterAdmin { email }).await
            })
            .await
        }
        EmailFormKind::EmailRecipient => {
            submit(email, |target_email| async move {
                client
                    .add_email_recipient(&AdminConfig {
                        target_email,
                        summary_send_time,
                        last_updated: Timestamp::now(),
                    })
                    .await
            })
            .await
        }
    }
}

#[derive(Properties, PartialEq)]
struct SendTimeSelectProps {
    selected: civil::Time,
    onchange: Callback<Event>,
}

#[function_component]
fn SendTimeSelect(props: &SendTimeSelectProps) -> Html {
    html! {
        <div class="flex flex-col">
            <label for="summary-send-time" class="block text-xs mb-1">
                {"Summary send time"}
            </label>
            <select
                id="summary-send-time"
                onchange={props.onchange.clone()}
                class="px-3 py-2 rounded-md border border-neutral-300 \
                       dark:border-neutral-600 bg-white dark:bg-neutral-800"
            >
                {for SUMMARY_SEND_TIMES.iter().enumerate().map(|(i, time)| html! {
                    <option
                        value={i.to_string()}
                        selected={*time == props.selected}
                    >
                        {time.strftime("%H:%M").to_string()}
                    </option>
                })}
            </select>
        </div>
    }
}
