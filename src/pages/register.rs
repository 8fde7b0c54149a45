//! Registration page for new accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::text_field::TextField;
use crate::util::validate::{validate_email, validate_password};

/// Pre-flight check for the registration form.
///
/// Returns the trimmed email and the password on success, or the first
/// failing rule's message.
fn validate_register_input(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if let Some(message) = validate_email(email) {
        return Err(message);
    }
    if let Some(message) = validate_password(password) {
        return Err(message);
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let secure = RwSignal::new(true);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_register_input(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&email_value, &password_value).await {
                    Ok(()) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        info.set(err.message_or(crate::net::api::REGISTER_FALLBACK));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
            busy.set(false);
        }
    };

    let no_error = Signal::derive(|| None::<String>);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Vitals"</h1>
                <p class="login-card__subtitle">"Create an account to start tracking"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=email
                        on_input=Callback::new(move |value| email.set(value))
                        error=no_error
                    />
                    <PasswordField
                        label="Password"
                        placeholder="At least 6 characters"
                        value=password
                        on_input=Callback::new(move |value| password.set(value))
                        secure=secure
                        on_toggle=Callback::new(move |()| secure.update(|masked| *masked = !*masked))
                        error=no_error
                    />
                    <TextField
                        label="Confirm password"
                        input_type="password"
                        value=confirm
                        on_input=Callback::new(move |value| confirm.set(value))
                        error=no_error
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a class="login-link" href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
