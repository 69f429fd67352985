const MAX_VISIBLE_CHARS: usize = 100;

/// Bounded rendering of client payloads (inline audio, form values) for logs.
pub fn preview_payload(payload: &str) -> String {
    let trimmed = payload.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible, total)
}
