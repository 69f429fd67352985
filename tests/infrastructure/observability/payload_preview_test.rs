use vocalref::infrastructure::observability::preview_payload;

#[test]
fn given_blank_payload_when_previewing_then_returns_empty_marker() {
    assert_eq!(preview_payload("   \n"), "[EMPTY]");
}

#[test]
fn given_short_payload_when_previewing_then_returns_trimmed_payload() {
    assert_eq!(preview_payload("  UklGRg==  "), "UklGRg==");
}

#[test]
fn given_long_payload_when_previewing_then_truncates_and_reports_length() {
    let payload = "A".repeat(250);

    let preview = preview_payload(&payload);

    assert_eq!(preview, format!("{}... (250 chars total)", "A".repeat(100)));
}

#[test]
fn given_multibyte_payload_when_previewing_then_cuts_on_char_boundary() {
    let payload = "é".repeat(150);

    let preview = preview_payload(&payload);

    assert!(preview.starts_with(&"é".repeat(100)));
    assert!(preview.ends_with("(150 chars total)"));
}
