// src/parse/activity.rs
//
// Activity names from the first column of a schedule table, cleaned into a
// stable form: "Swimming - Lane (18+) *Reservations required" → "swim - lane 18+".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{
    ACTIVITY_REPLACEMENTS, AGE_MAX_EXCLUSIVE, REDUCED_CAPACITY_SUFFIX, RESERVATION_NOT_REQUIRED,
    RESERVATION_REQUIRED,
};
use crate::core::{normalize_text, replace_literals};

// capture: pre-sep, age, post-sep
static AGE_MIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[\s-]+)\(?(?:ages\s+)?([0-9]+)(?:\s*\+)\)?([\s(-]+|$)").unwrap()
});

static REDUCED_CAPACITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^reduced(?:\s* capacity)?[\s-]*|[\s-]*reduced(?:\s* capacity)?$)").unwrap()
});

/// Clean an activity name. Total: any input yields some name.
pub fn clean_activity_name(text: &str) -> String {
    let name = normalize_text(text, false, true);
    let (name, _) = cut_reservation_requirement(&name);
    let (name, age) = cut_age_min(name);
    let (name, reduced) = cut_reduced_capacity(&name);
    let mut name = replace_literals(&name, ACTIVITY_REPLACEMENTS);
    if let Some(age) = age {
        name.truncate(name.trim_end_matches(['-', ' ']).len());
        name.push_str(&format!(" {age}+"));
    }
    if reduced {
        name.push_str(REDUCED_CAPACITY_SUFFIX);
    }
    normalize_text(&name, false, false)
}

/// Drop a trailing `*Reservations (not) required` clause. Returns the
/// requirement when a known clause was removed; unknown `*` clauses stay.
pub fn cut_reservation_requirement(name: &str) -> (&str, Option<bool>) {
    let Some(i) = name.rfind('*') else {
        return (name, None);
    };
    let clause = normalize_text(name[i..].trim_matches(['*', '.', ' ', '(', ')']), false, true);
    let required = if RESERVATION_NOT_REQUIRED.contains(&clause.as_str()) {
        false
    } else if RESERVATION_REQUIRED.contains(&clause.as_str()) {
        true
    } else {
        return (name, None);
    };
    (name[..i].trim(), Some(required))
}

/// Pull out a single minimum age ("50+", "(18+)", "ages 12 +"). Two or more
/// candidates are ambiguous and leave the name as is.
pub fn cut_age_min(name: &str) -> (String, Option<u32>) {
    let mut found = AGE_MIN_RE.captures_iter(name);
    let (Some(caps), None) = (found.next(), found.next()) else {
        return (s!(name), None);
    };
    let group = |i| caps.get(i).map_or("", |m| m.as_str());
    let (whole, pre, post) = (group(0), group(1), group(3));

    let Some(age) = group(2).parse::<u32>().ok().filter(|a| *a > 0 && *a < AGE_MAX_EXCLUSIVE) else {
        return (s!(name), None);
    };

    let mut sep = if pre.is_empty() { post } else { pre };
    if !sep.is_empty() && sep.trim().is_empty() {
        sep = if post.trim().is_empty() { " " } else { post };
    }
    (s!(name.replace(whole, sep).trim()), Some(age))
}

/// Strip "reduced" / "reduced capacity" from either end of the name.
pub fn cut_reduced_capacity(name: &str) -> (String, bool) {
    let out = REDUCED_CAPACITY_RE.replace_all(name, "");
    let changed = out != name;
    (out.into_owned(), changed)
}
