// src/core/text.rs
// Canonical form for scraped text. Every parser runs its input through
// `normalize_text` itself; callers are never trusted to have done it.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Normalize scraped text:
/// - NFKC compatibility normalization
/// - drop zero-width marks and any non-graphic character
/// - map every kind of space (and tab/VT/FF/nbsp, and newlines unless
///   `keep_newlines`) to an ASCII space
/// - map smart quotes to `"` / `'` / `<` / `>` and every dash to `-`
/// - lowercase when `lowercase`
/// - recompose, since a dropped character can leave a letter next to a
///   combining mark
/// - collapse runs of ASCII spaces, then trim
pub fn normalize_text(s: &str, keep_newlines: bool, lowercase: bool) -> String {
    let mut mapped = String::with_capacity(s.len());
    for ch in s.nfkc() {
        let Some(ch) = map_char(ch, keep_newlines) else { continue };
        if lowercase {
            mapped.extend(ch.to_lowercase());
        } else {
            mapped.push(ch);
        }
    }

    let mut out = String::with_capacity(mapped.len());
    let mut prev_space = false;
    for ch in mapped.nfkc() {
        if ch == ' ' {
            if prev_space { continue; }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out.trim().to_string()
}

fn map_char(ch: char, keep_newlines: bool) -> Option<char> {
    match ch {
        '\u{200b}' | '\u{feff}' | '\u{200d}' | '\u{200c}' => return None,
        '\n' if keep_newlines => return Some('\n'),
        '\n' | ' ' | '\t' | '\u{0b}' | '\u{0c}' | '\u{a0}' => return Some(' '),
        '\u{201c}' | '\u{201d}' | '\u{201f}' => return Some('"'),
        '\u{2018}' | '\u{2019}' | '\u{201b}' => return Some('\''),
        '\u{2039}' => return Some('<'),
        '\u{203a}' => return Some('>'),
        _ => {}
    }
    match ch.general_category() {
        GeneralCategory::SpaceSeparator => Some(' '),
        GeneralCategory::DashPunctuation => Some('-'),
        _ if is_graphic(ch) => Some(ch),
        _ => None,
    }
}

fn is_graphic(ch: char) -> bool {
    matches!(
        ch.general_category_group(),
        GeneralCategoryGroup::Letter
            | GeneralCategoryGroup::Mark
            | GeneralCategoryGroup::Number
            | GeneralCategoryGroup::Punctuation
            | GeneralCategoryGroup::Symbol
    )
}

/// Remove every ASCII space.
pub fn strip_spaces(s: &str) -> String {
    s.chars().filter(|&c| c != ' ').collect()
}

/// Like `str::split_once`, but cuts at whichever separator occurs earliest.
/// Ties go to the separator listed first.
pub fn cut_first<'a>(s: &'a str, seps: &[&str]) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(usize, usize)> = None;
    for sep in seps {
        if let Some(i) = s.find(sep) {
            match best {
                Some((bi, _)) if bi <= i => {}
                _ => best = Some((i, sep.len())),
            }
        }
    }
    best.map(|(i, n)| (&s[..i], &s[i + n..]))
}

/// Single-pass literal replacement. At each position the first table entry
/// that matches wins; replaced text is never rescanned.
pub fn replace_literals(s: &str, table: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    'scan: while let Some(ch) = rest.chars().next() {
        for (from, to) in table {
            if !from.is_empty() && rest.starts_with(from) {
                out.push_str(to);
                rest = &rest[from.len()..];
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Upper-case the first letter of every word, lower-case the rest.
/// Apostrophes do not start a new word ("women's" → "Women's").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if in_word { out.extend(ch.to_lowercase()); } else { out.extend(ch.to_uppercase()); }
            in_word = true;
        } else {
            out.push(ch);
            in_word = in_word && (ch == '\'' || ch == '\u{2019}');
        }
    }
    out
}
