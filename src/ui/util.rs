use rust_decimal::Decimal;

/// One-decimal percentage, or `"n/a"` when the ratio is undefined.
pub(crate) fn format_percent(ratio: Option<Decimal>) -> String {
    match ratio {
        Some(r) => format!("{r:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Text progress bar; `ratio` is clamped to `0..=1`.
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Parse a `#rrggbb` tag into a terminal color.
pub(crate) fn hex_color(tag: &str) -> Option<ratatui::style::Color> {
    let hex = tag.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(ratatui::style::Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Move a list cursor down by one.
pub(crate) fn select_next(index: &mut usize, len: usize) {
    if *index + 1 < len {
        *index += 1;
    }
}

/// Move a list cursor up by one.
pub(crate) fn select_prev(index: &mut usize) {
    *index = index.saturating_sub(1);
}
