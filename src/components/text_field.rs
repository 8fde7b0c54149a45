//! Labeled text input with a gated validation message.

use leptos::prelude::*;

/// A labeled input that reports edits and blurs to its owner.
///
/// The error line renders only when `error` yields a message, so
/// touched-field gating stays with the caller.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] node_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=input_type
                placeholder=placeholder
                node_ref=node_ref
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur.as_ref() {
                        on_blur.run(());
                    }
                }
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
