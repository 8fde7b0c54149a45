//! Password input with a masking toggle.

use leptos::prelude::*;

/// A labeled password input whose masking can be flipped by the caller.
///
/// Toggling only changes the input `type`; the value is never touched.
#[component]
pub fn PasswordField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] secure: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <span class="field__secure">
                <input
                    class="field__input"
                    class:field__input--invalid=move || error.get().is_some()
                    type=move || if secure.get() { "password" } else { "text" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.run(());
                        }
                    }
                />
                <button
                    class="field__toggle"
                    type="button"
                    aria-label=move || if secure.get() { "Show password" } else { "Hide password" }
                    on:click=move |_| on_toggle.run(())
                >
                    {move || if secure.get() { "Show" } else { "Hide" }}
                </button>
            </span>
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
