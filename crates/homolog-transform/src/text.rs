//! Text normalization for names and job titles.
//!
//! Diacritics are removed by compatibility decomposition followed by
//! dropping combining marks, which also unfolds ligatures (`ﬁ`) and
//! ordinal indicators (`º`). Latin letters without a decomposition (`ß`,
//! `ø`, `ł`, `ħ`, ...) are transliterated to their ASCII spelling.

use unicode_normalization::char::{decompose_compatible, is_combining_mark};

/// Non-breaking space variants found in spreadsheet exports.
fn is_nbsp(ch: char) -> bool {
    matches!(ch, '\u{00A0}' | '\u{2007}' | '\u{202F}')
}

fn transliteration(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "TH",
        'ı' => "i",
        'ħ' => "h",
        'Ħ' => "H",
        'ŧ' => "t",
        'Ŧ' => "T",
        'ƀ' => "b",
        'Ƀ' => "B",
        'ɨ' => "i",
        'Ɨ' => "I",
        'ƶ' => "z",
        'Ƶ' => "Z",
        'ǥ' => "g",
        'Ǥ' => "G",
        'ȼ' => "c",
        'Ȼ' => "C",
        'ɍ' => "r",
        'Ɍ' => "R",
        'ɏ' => "y",
        'Ɏ' => "Y",
        'ƒ' => "f",
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => "'",
        '\u{201C}' | '\u{201D}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        _ => return None,
    };
    Some(replacement)
}

fn fold(text: &str, nbsp: Option<char>) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        // Checked before decomposition, which would turn them into spaces.
        if is_nbsp(ch) {
            if let Some(replacement) = nbsp {
                out.push(replacement);
            }
            continue;
        }
        decompose_compatible(ch, |part| {
            if is_combining_mark(part) {
                return;
            }
            match transliteration(part) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(part),
            }
        });
    }
    out.trim().to_string()
}

/// Strip diacritics, turn non-breaking spaces into spaces, trim.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    fold(text, Some(' '))
}

/// Like [`normalize`], but non-breaking spaces are deleted outright.
///
/// Used for canonical country spellings, where non-breaking spaces are
/// stray characters rather than word separators.
pub fn normalize_country(text: &str) -> String {
    fold(text, None)
}

/// Remove non-breaking spaces and trim, keeping diacritics.
pub fn strip_nbsp(text: &str) -> String {
    text.chars()
        .filter(|ch| !is_nbsp(*ch))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Join key for country names: normalized and uppercased.
pub fn country_key(text: &str) -> String {
    normalize(text).to_uppercase()
}
