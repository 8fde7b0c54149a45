//! Dashboard page listing recorded readings with a quick-add form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the reading history
//! once a token is present and records new readings against the same
//! bearer token. A 401 on either call clears the token, which re-arms
//! the login redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::entry_card::EntryCard;
use crate::components::text_field::TextField;
use crate::net::types::NewHealthEntry;
use crate::state::auth::AuthState;
use crate::state::entries::EntriesState;
use crate::util::auth::install_unauth_redirect;
use crate::util::validate::{validate_bp, validate_glucose, validate_weight};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entries = expect_context::<RwSignal<EntriesState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    // Load the reading history once per mount, as soon as a token exists.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(token) = auth.with(|state| state.token.clone()) else {
            return;
        };
        requested.set(true);
        entries.update(|state| state.loading = true);
        load_entries(auth, entries, token);
    });

    // Quick-add form state.
    let weight = RwSignal::new(String::new());
    let bp = RwSignal::new(String::new());
    let glucose = RwSignal::new(String::new());
    let weight_error = RwSignal::new(None::<String>);
    let bp_error = RwSignal::new(None::<String>);
    let glucose_error = RwSignal::new(None::<String>);

    let on_record = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if entries.with(|state| state.submit_pending) {
            return;
        }
        let weight_parsed = validate_weight(&weight.get());
        let bp_parsed = validate_bp(&bp.get());
        let glucose_parsed = validate_glucose(&glucose.get());
        weight_error.set(weight_parsed.as_ref().err().map(|message| (*message).to_owned()));
        bp_error.set(bp_parsed.as_ref().err().map(|message| (*message).to_owned()));
        glucose_error.set(glucose_parsed.as_ref().err().map(|message| (*message).to_owned()));
        let (Ok(weight_value), Ok(bp_value), Ok(glucose_value)) =
            (weight_parsed, bp_parsed, glucose_parsed)
        else {
            return;
        };
        let Some(token) = auth.with(|state| state.token.clone()) else {
            return;
        };
        let entry = NewHealthEntry { weight: weight_value, bp: bp_value, glucose: glucose_value };
        entries.update(|state| state.submit_pending = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::record_entry(&token, &entry).await {
                Ok(ack) => {
                    log::info!("recorded reading {}", ack.data_id);
                    weight.set(String::new());
                    bp.set(String::new());
                    glucose.set(String::new());
                    entries.update(|state| state.submit_pending = false);
                    // Reload so the new reading appears with its
                    // server-assigned id and timestamp.
                    if let Some(token) = auth.with_untracked(|state| state.token.clone()) {
                        entries.update(|state| state.loading = true);
                        load_entries(auth, entries, token);
                    }
                }
                Err(err) => {
                    log::warn!("failed to record reading: status {}", err.status);
                    if err.is_unauthorized() {
                        auth.update(|state| state.token = None);
                    }
                    entries.update(|state| {
                        state.submit_pending = false;
                        state.error = Some(err.message_or(crate::net::api::ENTRIES_FALLBACK));
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, entry);
            entries.update(|state| state.submit_pending = false);
        }
    };

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        auth.update(|state| state.token = None);
        entries.set(EntriesState::default());
        navigate_logout("/login", NavigateOptions::default());
    };

    let pending = Signal::derive(move || entries.with(|state| state.submit_pending));
    let loading = Signal::derive(move || entries.with(|state| state.loading));
    let list_error = Signal::derive(move || entries.with(|state| state.error.clone()));
    let has_entries = Signal::derive(move || entries.with(|state| !state.items.is_empty()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Vitals"</h1>
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            <Show when=move || list_error.get().is_some()>
                <p class="dashboard-message dashboard-message--error">
                    {move || list_error.get().unwrap_or_default()}
                </p>
            </Show>

            <form class="entry-form" on:submit=on_record>
                <TextField
                    label="Weight (kg)"
                    placeholder="72.5"
                    value=weight
                    on_input=Callback::new(move |value| weight.set(value))
                    error=weight_error
                />
                <TextField
                    label="Blood pressure (mmHg)"
                    placeholder="120/80"
                    value=bp
                    on_input=Callback::new(move |value| bp.set(value))
                    error=bp_error
                />
                <TextField
                    label="Glucose (mg/dL)"
                    placeholder="95"
                    value=glucose
                    on_input=Callback::new(move |value| glucose.set(value))
                    error=glucose_error
                />
                <button class="entry-form__submit" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Recording..." } else { "Record Reading" }}
                </button>
            </form>

            <Show when=move || loading.get()>
                <p class="dashboard-message">"Loading readings..."</p>
            </Show>
            <Show when=move || !loading.get() && !has_entries.get()>
                <p class="dashboard-message">"No readings yet. Record your first one above."</p>
            </Show>
            <ul class="entry-list">
                <For
                    each=move || entries.get().items
                    key=|entry| entry.id
                    let:entry
                >
                    <EntryCard entry=entry/>
                </For>
            </ul>
        </div>
    }
}

/// Fetch the reading history into `entries`, clearing the token on 401.
fn load_entries(auth: RwSignal<AuthState>, entries: RwSignal<EntriesState>, token: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_entries(&token).await {
            Ok(items) => entries.update(|state| {
                state.items = items;
                state.loading = false;
                state.error = None;
            }),
            Err(err) => {
                log::warn!("failed to load readings: status {}", err.status);
                if err.is_unauthorized() {
                    auth.update(|state| state.token = None);
                }
                entries.update(|state| {
                    state.loading = false;
                    state.error = Some(err.message_or(crate::net::api::ENTRIES_FALLBACK));
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, token);
        entries.update(|state| state.loading = false);
    }
}
