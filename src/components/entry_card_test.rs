use super::*;

#[test]
fn display_timestamp_formats_iso_datetime() {
    assert_eq!(display_timestamp("2026-08-06T08:15:00"), "2026-08-06 08:15");
}

#[test]
fn display_timestamp_drops_fractional_seconds() {
    assert_eq!(display_timestamp("2026-08-06T08:15:00.123456"), "2026-08-06 08:15");
}

#[test]
fn display_timestamp_passes_through_unrecognized_values() {
    assert_eq!(display_timestamp("yesterday"), "yesterday");
    assert_eq!(display_timestamp(""), "");
}
