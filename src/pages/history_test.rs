use super::*;

// =============================================================
// Message previews
// =============================================================

#[test]
fn message_preview_passes_short_messages_through() {
    assert_eq!(message_preview("Compare these models", 120), "Compare these models");
}

#[test]
fn message_preview_flattens_newlines() {
    assert_eq!(message_preview("line one\nline two", 120), "line one line two");
}

#[test]
fn message_preview_truncates_with_ellipsis() {
    let long = "a".repeat(200);
    let preview = message_preview(&long, 120);
    assert_eq!(preview.chars().count(), 121);
    assert!(preview.ends_with('…'));
}

#[test]
fn message_preview_counts_chars_not_bytes() {
    // Multi-byte chars must not split; 10 runes fit under a 10-char limit.
    let message = "héllo wörld";
    let preview = message_preview(message, 11);
    assert_eq!(preview, "héllo wörld");
    let short = message_preview(message, 5);
    assert_eq!(short, "héllo…");
}
