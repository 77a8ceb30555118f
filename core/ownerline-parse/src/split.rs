//! Line splitting and segment cleanup.

/// Splits a raw name line into trimmed, non-empty owner segments.
///
/// Every standalone `and` (any case) is treated as `&`. Segments keep
/// their left-to-right order.
pub fn split(line: &str) -> Vec<String> {
    replace_and(line)
        .split('&')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn replace_and(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut word = String::new();
    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        flush_word(&mut out, &mut word);
        out.push(c);
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.eq_ignore_ascii_case("and") {
        out.push('&');
    } else {
        out.push_str(word);
    }
    word.clear();
}

/// Normalizes one segment: drops periods, collapses whitespace and strips a
/// trailing `ET AL` / `ETAL`. May return an empty string.
pub fn clean_segment(raw: &str) -> String {
    let without_periods: String = raw.chars().filter(|&c| c != '.').collect();
    let collapsed = without_periods.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = strip_et_al(&collapsed);
    if stripped.len() == collapsed.len() {
        return collapsed;
    }
    // Only the separator left behind by the suffix is trimmed.
    stripped
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}

fn strip_et_al(s: &str) -> &str {
    for suffix in ["ET AL", "ETAL"] {
        let Some(start) = s.len().checked_sub(suffix.len()) else {
            continue;
        };
        if !s.is_char_boundary(start) || !s[start..].eq_ignore_ascii_case(suffix) {
            continue;
        }
        let head = &s[..start];
        if head.is_empty() || head.ends_with(|c: char| c == ',' || c.is_whitespace()) {
            return head;
        }
    }
    s
}
