// tests/normalize.rs
//
// Tests for text normalization of scraped cell text.
//
use rec_schedules::core::normalize_text;

const SAMPLES: &[&str] = &[
    "Lane Swim",
    "  Lane\u{a0}Swim\u{200b} \u{2013} 50+  ",
    "\u{201c}Drop-in\u{201d} \u{2018}swim\u{2019}",
    "ＡＱＵＡＦＩＴ １２",
    "a\n\n  b\tc\u{2003}d",
    "Public Skating\u{ae}",
    "\u{feff}Mon\u{2014}Fri\u{2009}7\u{2212}9",
    "Ⅻ ﬁtness",
    "Cafe\u{200b}\u{301} swim",
    "Cafe\u{7}\u{301} swim",
    "a\u{200d}\u{308}quafit \u{feff}\u{327}",
    "",
    "   ",
];

#[test]
fn idempotent_for_every_flag_combination() {
    for s in SAMPLES {
        for keep_newlines in [false, true] {
            for lowercase in [false, true] {
                let once = normalize_text(s, keep_newlines, lowercase);
                let twice = normalize_text(&once, keep_newlines, lowercase);
                assert_eq!(once, twice, "{s:?} nl={keep_newlines} lc={lowercase}");
            }
        }
    }
}

#[test]
fn spaces_dashes_and_invisibles() {
    assert_eq!(normalize_text("  Lane\u{a0}Swim\u{200b} \u{2013} 50+  ", false, false), "Lane Swim - 50+");
    assert_eq!(normalize_text("a \t\u{2003} b", false, false), "a b");
    assert_eq!(normalize_text("a\u{7}b", false, false), "ab");
}

#[test]
fn smart_quotes_become_ascii() {
    assert_eq!(
        normalize_text("\u{201c}Drop-in\u{201d} \u{2018}swim\u{2019} \u{2039}x\u{203a}", false, false),
        "\"Drop-in\" 'swim' <x>"
    );
}

#[test]
fn compatibility_forms_fold() {
    assert_eq!(normalize_text("ＡＱＵＡＦＩＴ １２", false, false), "AQUAFIT 12");
    assert_eq!(normalize_text("ＡＱＵＡＦＩＴ", false, true), "aquafit");
}

#[test]
fn newlines_kept_only_on_request() {
    assert_eq!(normalize_text("a\nb", true, false), "a\nb");
    assert_eq!(normalize_text("a\nb", false, false), "a b");
    assert_eq!(normalize_text("\na\n", true, false), "a");
}

#[test]
fn dropped_invisibles_do_not_split_accents() {
    assert_eq!(normalize_text("Cafe\u{200b}\u{301} swim", false, false), "Caf\u{e9} swim");
    assert_eq!(normalize_text("Cafe\u{7}\u{301} swim", false, true), "caf\u{e9} swim");
}
