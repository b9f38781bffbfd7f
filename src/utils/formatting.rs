//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Right-align `s` in `width` display columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Cut `s` to at most `max` display columns, adding "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 3 > max {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push_str("...");
    out
}

/// Minutes as "02h 25m" (or "02:25" when `short`).
pub fn mins2readable(mins: i64, short: bool) -> String {
    let hours = mins.abs() / 60;
    let minutes = mins.abs() % 60;
    let sign = if mins < 0 { "-" } else { "" };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// A horizontal rule made of the configured separator character.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
