//! Locale-aware number formatting for tick and tooltip labels.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Anything else falls back to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Format a value with grouping separators: 0 decimals from 100 up, 1 from
/// 10 up, otherwise 2. Trailing fractional zeros are dropped.
pub fn format_value(v: f64, locale: &Locale) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let a = v.abs();
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    let fixed = format!("{:.*}", prec, a);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let Ok(int_val) = int_part.parse::<u128>() else {
        return format!("{v:.0}");
    };

    let mut out = String::new();
    if v < 0.0 && (int_val != 0 || !frac.is_empty()) {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&int_val.to_formatted_string(locale));
    if !frac.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_grouping_and_precision() {
        let en_loc = map_locale("en");
        assert_eq!(format_value(30000.0, en_loc), "30,000");
        assert_eq!(format_value(12.34, en_loc), "12.3");
        assert_eq!(format_value(0.5, en_loc), "0.5");
        assert_eq!(format_value(2.0, en_loc), "2");
        assert_eq!(format_value(-1500.0, en_loc), "-1,500");
        assert_eq!(format_value(-0.001, en_loc), "0");
    }

    #[test]
    fn german_separators() {
        let de_loc = map_locale("de_DE");
        assert_eq!(format_value(30000.0, de_loc), "30.000");
        assert_eq!(format_value(1.5, de_loc), "1,5");
    }

    #[test]
    fn unknown_tag_defaults_to_english() {
        assert_eq!(map_locale("xx").name(), "en");
    }
}
