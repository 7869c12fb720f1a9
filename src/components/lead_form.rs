use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ConfettiBurst;
use crate::models::{Ack, FieldName, SubmissionState};
use crate::pipeline::{LeadForm, ServerSubmitter, WaitlistSubmitter, SUBMIT_FAILURE_NOTICE};

/// How long the shake cue stays on fields that blocked a submit
#[cfg(feature = "hydrate")]
const SHAKE_MS: u32 = 500;

/// The waitlist signup form. All validation, formatting, and submission
/// state lives in [`LeadForm`]; this component only wires DOM events to it
/// and renders what it says.
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let form = RwSignal::new(LeadForm::new());
    let ack = RwSignal::new(None::<Ack>);
    let shaking = RwSignal::new(Vec::<FieldName>::new());
    let bursts = RwSignal::new(0u32);

    let state = Signal::derive(move || form.with(|f| f.state()));
    let submitting = move || state.get().is_submitting();

    let field_value = move |field: FieldName| form.with(|f| f.value(field).to_string());
    let field_error = move |field: FieldName| form.with(|f| f.error(field).map(str::to_string));
    let is_shaking = move |field: FieldName| shaking.get().contains(&field);

    // Editing after a failed attempt returns the form to a clean Idle
    // state, which also dismisses the failure notice
    let on_input = move |field: FieldName, value: String| {
        form.update(|f| {
            f.reset_attempt();
            f.input(field, &value);
        });
    };
    let on_blur = move |field: FieldName| {
        form.update(|f| f.blur(field));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut record = None;
        form.update(|f| record = f.begin_submit(Utc::now()));

        let Some(record) = record else {
            // Nothing was sent; cue the offending fields
            let in_error = form.with(|f| f.fields_in_error());
            if !in_error.is_empty() {
                shaking.set(in_error);
                #[cfg(feature = "hydrate")]
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SHAKE_MS).await;
                    let _ = shaking.try_set(Vec::new());
                });
            }
            return;
        };

        let email = record.email.clone();
        spawn_local(async move {
            let outcome = ServerSubmitter.submit(record).await;
            if let Ok(a) = &outcome {
                ack.set(Some(a.clone()));
                bursts.update(|b| *b += 1);
                // Best-effort conversion tracking; the signup outcome is
                // already decided and a tracking failure never surfaces
                let tracked = email.clone();
                spawn_local(async move {
                    let _ = crate::server_fns::track_conversion(
                        "waitlist_signup".to_string(),
                        tracked,
                    )
                    .await;
                });
            }
            form.update(|f| f.finish_submit(&outcome));
        });
    };

    view! {
        <div class="waitlist-card">
            <ConfettiBurst fire=bursts/>

            <Show
                when=move || state.get() != SubmissionState::Succeeded
                fallback=move || {
                    view! {
                        <div class="form-success">
                            <h3>"You're on the list!"</h3>
                            {move || {
                                ack.get()
                                    .map(|a| {
                                        view! {
                                            <p>
                                                "You're number " <strong>{a.position}</strong>
                                                " in line. We'll email you the moment we launch."
                                            </p>
                                        }
                                    })
                            }}
                        </div>
                    }
                }
            >
                <form novalidate=true on:submit=on_submit>
                    <div class="form-group" class:shake=move || is_shaking(FieldName::FullName)>
                        <label for="full-name">{FieldName::FullName.label()}</label>
                        <input
                            type="text"
                            id="full-name"
                            name=FieldName::FullName.as_str()
                            placeholder="Ada Lovelace"
                            class:invalid=move || field_error(FieldName::FullName).is_some()
                            prop:value=move || field_value(FieldName::FullName)
                            on:input=move |ev| on_input(FieldName::FullName, event_target_value(&ev))
                            on:blur=move |_| on_blur(FieldName::FullName)
                        />
                        {move || {
                            field_error(FieldName::FullName)
                                .map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </div>

                    <div class="form-group" class:shake=move || is_shaking(FieldName::Email)>
                        <label for="email">{FieldName::Email.label()}</label>
                        <input
                            type="email"
                            id="email"
                            name=FieldName::Email.as_str()
                            placeholder="you@example.com"
                            class:invalid=move || field_error(FieldName::Email).is_some()
                            prop:value=move || field_value(FieldName::Email)
                            on:input=move |ev| on_input(FieldName::Email, event_target_value(&ev))
                            on:blur=move |_| on_blur(FieldName::Email)
                        />
                        {move || {
                            field_error(FieldName::Email)
                                .map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </div>

                    <div class="form-group" class:shake=move || is_shaking(FieldName::Phone)>
                        <label for="phone">{FieldName::Phone.label()}</label>
                        <input
                            type="tel"
                            id="phone"
                            name=FieldName::Phone.as_str()
                            placeholder="(555) 123-4567"
                            class:invalid=move || field_error(FieldName::Phone).is_some()
                            prop:value=move || field_value(FieldName::Phone)
                            on:input=move |ev| on_input(FieldName::Phone, event_target_value(&ev))
                            on:blur=move |_| on_blur(FieldName::Phone)
                        />
                        {move || {
                            field_error(FieldName::Phone)
                                .map(|e| view! { <p class="field-error">{e}</p> })
                        }}
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || {
                            if submitting() {
                                view! {
                                    <span class="btn-busy">
                                        <span class="spinner"></span>
                                        " Joining..."
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"Join the Waitlist"</span> }.into_any()
                            }
                        }}
                    </button>

                    <Show when=move || state.get() == SubmissionState::Failed>
                        <p class="submit-error">{SUBMIT_FAILURE_NOTICE}</p>
                    </Show>
                </form>
            </Show>
        </div>
    }
}
