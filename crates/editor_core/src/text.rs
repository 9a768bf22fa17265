//! Text normalization helpers for seeding and reading back surface content.

/// Normalize CRLF/CR to LF.
///
/// Editable surfaces store their values with LF newlines; seed content may
/// arrive with platform line endings.
pub fn normalize_newlines(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    while let Some(ch) = it.next() {
        match ch {
            '\r' => {
                if it.peek() == Some(&'\n') {
                    let _ = it.next();
                }
                out.push('\n');
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Strip the common leading whitespace shared by all non-empty lines.
///
/// Seed content written inline in indented host markup carries the host's
/// indentation on every line; dedenting recovers the author's text. Lines
/// consisting only of whitespace do not contribute to the common prefix.
pub fn dedent(s: &str) -> String {
    // Indent is counted in chars, not bytes: mixed-width whitespace (tabs
    // next to U+00A0, say) must never slice mid-character.
    let indent = s
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    if indent == 0 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    for (i, line) in s.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() {
            continue;
        }
        let start = line
            .char_indices()
            .nth(indent)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len());
        out.push_str(&line[start..]);
    }
    out
}

/// Strip trailing newlines introduced by the editable surface.
///
/// Contenteditable-style surfaces append a final newline that is not part of
/// the authored value; the form value getter applies this fixed rule.
pub fn strip_surface_trailing(s: &str) -> &str {
    s.trim_end_matches('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_newlines_handles_crlf_and_bare_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize_newlines("plain\ntext"), "plain\ntext");
    }

    #[test]
    fn dedent_strips_common_indentation() {
        assert_eq!(dedent("\t# Title\n\t\ttext"), "# Title\n\ttext");
        assert_eq!(dedent("    a\n    b"), "a\nb");
    }

    #[test]
    fn dedent_ignores_blank_lines_for_prefix() {
        assert_eq!(dedent("  a\n\n  b"), "a\n\nb");
    }

    #[test]
    fn dedent_handles_mixed_width_whitespace_indentation() {
        // '\t' is one byte, U+00A0 is two; both count as one indent char.
        assert_eq!(dedent("\ta\n\u{a0}b"), "a\nb");
        assert_eq!(dedent("\u{a0}\u{a0}a\n\t\tb"), "a\nb");
    }

    #[test]
    fn dedent_without_indentation_is_identity() {
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn strip_surface_trailing_removes_only_trailing_newlines() {
        assert_eq!(strip_surface_trailing("# Hi\n"), "# Hi");
        assert_eq!(strip_surface_trailing("# Hi\n\n"), "# Hi");
        assert_eq!(strip_surface_trailing("a\nb"), "a\nb");
        assert_eq!(strip_surface_trailing("a "), "a ");
    }
}
