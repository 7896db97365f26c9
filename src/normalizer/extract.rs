//! Candidate extraction from raw provider text.
//!
//! Two stages: (1) the interior of the first complete fenced block, (2) otherwise the
//! whole text. An optional info string (`json`, `markdown`, ...) on the opening fence
//! line is not part of the candidate.

const FENCE: &str = "```";

/// Interior of the first complete fenced block, if any.
pub fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let after_open = &text[open + FENCE.len()..];
    let body = &after_open[info_string_len(after_open)..];
    let close = body.find(FENCE)?;
    Some(&body[..close])
}

/// The text the normalizer attempts to parse.
pub fn candidate(text: &str) -> &str {
    fenced_block(text).unwrap_or(text).trim()
}

fn is_info_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')
}

/// Length of the info string following an opening fence.
///
/// `json` is always an info string, even when the payload follows on the same line.
/// Any other token counts only when nothing else follows it on the opening line.
fn info_string_len(after_open: &str) -> usize {
    let run = after_open
        .find(|c: char| !is_info_char(c))
        .unwrap_or(after_open.len());
    let (token, rest) = after_open.split_at(run);
    if token.is_empty() {
        return 0;
    }
    if token.eq_ignore_ascii_case("json") {
        return run;
    }
    let opening_line_ends = rest.lines().next().map_or(true, |line| line.trim().is_empty());
    if opening_line_ends {
        run
    } else {
        0
    }
}
