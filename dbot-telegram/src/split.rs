//! Splits outgoing text to fit Telegram's per-message length limit.

/// Telegram rejects messages longer than this, counted in UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Splits `text` into parts of at most `limit` UTF-16 units, breaking at line ends where possible.
///
/// A single line longer than `limit` is cut at char boundaries. Whitespace-only parts are dropped
/// since Telegram refuses them.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = utf16_len(line);
        if current_len + line_len > limit && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if line_len <= limit {
            current.push_str(line);
            current_len += line_len;
            continue;
        }
        for c in line.chars() {
            let c_len = c.len_utf16();
            if current_len + c_len > limit {
                parts.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(c);
            current_len += c_len;
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    parts.retain(|part| !part.trim().is_empty());
    parts
}

fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}
