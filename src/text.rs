//! Text measurement heuristics for layout (no font is loaded).

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Estimated pixel width of `text` at `font_px`.
pub fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    (text.chars().count() as f64 * font_px * GLYPH_WIDTH_RATIO).ceil()
}

/// Cut `text` so it fits `max_px`, ending with a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    if estimate_text_width(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out: String = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width(&out, font_px) + font_px * GLYPH_WIDTH_RATIO > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

/// Greedy word wrap into lines of at most `max_px`. Words longer than a
/// whole line are truncated.
pub fn wrap_to_width(text: &str, font_px: f64, max_px: f64) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if estimate_text_width(&candidate, font_px) <= max_px {
            cur = candidate;
            continue;
        }
        if !cur.is_empty() {
            lines.push(std::mem::take(&mut cur));
        }
        cur = truncate_to_width(word, font_px, max_px);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        // 12 px font → 7.2 px per glyph, 80 px fits 11 glyphs.
        let lines = wrap_to_width("scaling rust services in production", 12.0, 80.0);
        assert_eq!(lines, vec!["scaling", "rust", "services in", "production"]);
    }

    #[test]
    fn truncates_long_words_with_ellipsis() {
        let s = truncate_to_width("supercalifragilistic", 10.0, 60.0);
        assert!(s.ends_with('…'));
        assert!(estimate_text_width(&s, 10.0) <= 60.0);
    }
}
