//! Discord message length handling
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Discord message content limit (in bytes here, which is never more permissive)
pub const MESSAGE_LIMIT: usize = 2000;

/// Split text into messages no longer than `limit` bytes
///
/// Splits happen on line breaks where possible. A single line longer than the
/// limit is cut on character boundaries.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        // +1 for the newline joining it to `current`
        let needed = if current.is_empty() { line.len() } else { line.len() + 1 };
        if current.len() + needed > limit && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }

        if line.len() > limit {
            let mut start = 0;
            let mut end = 0;
            for (idx, ch) in line.char_indices() {
                if idx + ch.len_utf8() - start > limit {
                    parts.push(line[start..end].to_string());
                    start = end;
                }
                end = idx + ch.len_utf8();
            }
            current.push_str(&line[start..]);
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_part() {
        assert_eq!(split_message("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_splits_on_lines() {
        let parts = split_message("aaaa\nbbbb\ncccc", 9);
        assert_eq!(parts, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_long_line_respects_char_boundaries() {
        let text = "é".repeat(10); // 20 bytes
        let parts = split_message(&text, 5);
        assert!(parts.iter().all(|p| p.len() <= 5));
        assert_eq!(parts.concat(), text);
    }

    #[test]
    fn test_every_part_within_limit() {
        let text = (0..300)
            .map(|i| format!("line number {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let parts = split_message(&text, MESSAGE_LIMIT);
        assert!(parts.len() > 1);
        assert!(parts.iter().all(|p| p.len() <= MESSAGE_LIMIT));
    }
}
