//! Login page: email + password with client-side validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! All form behavior lives in the `state::login_form` reducer; this
//! component translates DOM events into `LoginEvent`s and runs the
//! returned effects (auth call, navigation). A successful login writes
//! the token into the shared `AuthState` and navigates to the dashboard,
//! which unmounts this screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::state::auth::AuthState;
use crate::state::login_form::{Field, LoginEffect, LoginEvent, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let email_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(input) = email_ref.get() {
            let _ = input.focus();
        }
    });

    // Field events cannot produce effects; settle/submit paths handle
    // theirs explicitly.
    let dispatch = move |event: LoginEvent| {
        let _ = form.try_update(|state| state.apply(event));
    };

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let effect = form
            .try_update(|state| state.apply(LoginEvent::SubmitPressed))
            .unwrap_or(LoginEffect::None);
        let LoginEffect::Authenticate { attempt, email, password } = effect else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let event = match crate::net::api::login(&email, &password).await {
                    Ok(resp) => LoginEvent::CallResolved { attempt, access_token: resp.access_token },
                    Err(err) => LoginEvent::CallRejected {
                        attempt,
                        message: err.message_or(crate::net::api::LOGIN_FALLBACK),
                    },
                };
                // The screen may have unmounted while the call was in
                // flight; `try_update` drops the settlement in that case.
                let effect = form
                    .try_update(|state| state.apply(event))
                    .unwrap_or(LoginEffect::None);
                if let LoginEffect::GoToDashboard { token } = effect {
                    auth.update(|state| state.token = Some(token));
                    navigate("/", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (attempt, email, password, &navigate_submit, &auth);
        }
    };

    let email_value = Signal::derive(move || form.with(|state| state.values.email.clone()));
    let password_value = Signal::derive(move || form.with(|state| state.values.password.clone()));
    let email_error =
        Signal::derive(move || form.with(|state| state.field_error(Field::Email).map(ToOwned::to_owned)));
    let password_error =
        Signal::derive(move || form.with(|state| state.field_error(Field::Password).map(ToOwned::to_owned)));
    let general_error =
        Signal::derive(move || form.with(|state| state.general_error().map(ToOwned::to_owned)));
    let secure = Signal::derive(move || form.with(|state| state.secure_entry));
    let submitting = Signal::derive(move || form.with(LoginForm::submitting));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Vitals"</h1>
                <p class="login-card__subtitle">"Sign in to keep tracking your readings"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email_value
                        on_input=Callback::new(move |value| {
                            dispatch(LoginEvent::FieldChanged { field: Field::Email, value });
                        })
                        on_blur=Callback::new(move |()| {
                            dispatch(LoginEvent::FieldBlurred { field: Field::Email });
                        })
                        error=email_error
                        node_ref=email_ref
                    />
                    <PasswordField
                        label="Password"
                        placeholder="At least 6 characters"
                        value=password_value
                        on_input=Callback::new(move |value| {
                            dispatch(LoginEvent::FieldChanged { field: Field::Password, value });
                        })
                        on_blur=Callback::new(move |()| {
                            dispatch(LoginEvent::FieldBlurred { field: Field::Password });
                        })
                        secure=secure
                        on_toggle=Callback::new(move |()| {
                            dispatch(LoginEvent::SecureEntryToggled);
                        })
                        error=password_error
                    />
                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || general_error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || general_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? "
                    <a class="login-link" href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
