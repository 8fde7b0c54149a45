//! Card for one recorded health reading.

#[cfg(test)]
#[path = "entry_card_test.rs"]
mod entry_card_test;

use leptos::prelude::*;

use crate::net::types::HealthEntry;

/// One recorded reading: weight, blood pressure, and glucose.
#[component]
pub fn EntryCard(entry: HealthEntry) -> impl IntoView {
    let recorded = display_timestamp(&entry.timestamp);
    view! {
        <li class="entry-card">
            <span class="entry-card__when">{recorded}</span>
            <span class="entry-card__reading">
                <span class="entry-card__value">{format!("{:.1}", entry.weight)}</span>
                <span class="entry-card__unit">"kg"</span>
            </span>
            <span class="entry-card__reading">
                <span class="entry-card__value">{entry.bp.clone()}</span>
                <span class="entry-card__unit">"mmHg"</span>
            </span>
            <span class="entry-card__reading">
                <span class="entry-card__value">{format!("{:.0}", entry.glucose)}</span>
                <span class="entry-card__unit">"mg/dL"</span>
            </span>
        </li>
    }
}

/// Render an ISO-8601 server timestamp as `YYYY-MM-DD HH:MM`.
///
/// Unrecognized values pass through unchanged rather than erroring; the
/// timestamp is display-only.
fn display_timestamp(timestamp: &str) -> String {
    let trimmed = timestamp.split('.').next().unwrap_or(timestamp);
    let spaced = trimmed.replacen('T', " ", 1);
    match (spaced.get(..16), spaced.get(16..17)) {
        (Some(minutes), Some(":")) => minutes.to_owned(),
        _ => spaced,
    }
}
