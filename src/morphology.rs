//! Rule-based case normalization for Ukrainian place names.
//!
//! Alert text puts places in accusative/locative ("на Борзну", "у Полтаві");
//! gazetteer keys are nominative. A suffix rewrite table gets us there
//! without a dictionary. Wrong guesses are tolerated: the gazetteer tries
//! several variants and drops the mention if none resolves.

/// Suffix rewrites, longest first. First match wins per word.
const CASE_RULES: &[(&str, &str)] = &[
    // oblast-style names: Сахновщину/Сахновщині -> Сахновщина
    ("ччину", "ччина"),
    ("ччині", "ччина"),
    ("щину", "щина"),
    ("щині", "щина"),
    ("щини", "щина"),
    ("чину", "чина"),
    ("чині", "чина"),
    // -івка settlements: Бородянку is NOT this class, Михайлівку is
    ("івку", "івка"),
    ("івці", "івка"),
    ("янку", "янка"),
    ("янці", "янка"),
    ("инку", "инка"),
    // adjectival endings: Запорізьку -> Запорізька
    ("ській", "ська"),
    ("ську", "ська"),
    ("цькій", "цька"),
    ("цьку", "цька"),
    // instrumental: Уманню -> Умань, Одесою -> Одеса; the doubled-consonant
    // rows must sit above the plain -ню/-лю ones
    ("нню", "нь"),
    ("ттю", "ть"),
    ("ллю", "ль"),
    ("ою", "а"),
    ("ею", "я"),
    ("єю", "я"),
    // soft feminine: Вінницю -> Вінниця
    ("цю", "ця"),
    ("ню", "ня"),
    ("лю", "ля"),
];

/// Words at or below this many chars are left alone by the generic rules,
/// so "суму" (an amount) or short names never get rewritten.
const MIN_WORD_CHARS: usize = 5;

fn word_to_nominative(word: &str) -> String {
    let chars = word.chars().count();
    for (suffix, replacement) in CASE_RULES {
        if word.ends_with(suffix) && chars > suffix.chars().count() + 1 {
            let stem_len = word.len() - suffix.len();
            return format!("{}{}", &word[..stem_len], replacement);
        }
    }
    if chars > MIN_WORD_CHARS {
        // generic hard/soft accusative: Полтаву -> Полтава, Вишню -> Вишня
        if let Some(stem) = word.strip_suffix('у') {
            return format!("{stem}а");
        }
        if let Some(stem) = word.strip_suffix('ю') {
            return format!("{stem}я");
        }
    }
    word.to_string()
}

/// Per-word, first-match-wins rewrite; names already in nominative pass
/// through unchanged.
pub fn to_nominative(token: &str) -> String {
    token
        .split_whitespace()
        .map(word_to_nominative)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Locality-type prefixes the gazetteer should never see.
const PLACE_PREFIXES: &[&str] = &[
    "м.", "м ", "с.", "с ", "смт.", "смт ", "сел.", "н.п.", "нп ", "село ",
    "селище ", "місто ", "хутір ", "ст.", "станція ",
];

pub fn strip_prefix(name: &str) -> &str {
    for prefix in PLACE_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest.trim_start();
        }
    }
    name
}

/// Lookup variants in the order the gazetteer tries them. The blunter
/// endings live here rather than in `to_nominative` because they mangle
/// legitimate nominatives ("Суми") when applied unconditionally.
pub fn name_variants(name: &str) -> Vec<String> {
    let base = strip_prefix(name).trim();
    let mut out: Vec<String> = Vec::with_capacity(6);
    let mut push = |v: String| {
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    };

    push(base.to_string());
    push(to_nominative(base));

    if let Some(stem) = base.strip_suffix('у').or_else(|| base.strip_suffix('ю')) {
        push(stem.to_string());
    }
    if let Some(stem) = base.strip_suffix('и') {
        push(format!("{stem}а"));
    }
    if let Some(stem) = base.strip_suffix('і') {
        push(format!("{stem}а"));
        push(format!("{stem}я"));
    }
    if let Some(stem) = base.strip_suffix("ові") {
        // Харкові -> Харків
        push(format!("{stem}ів"));
        push(stem.to_string());
    }
    if let Some(stem) = base.strip_suffix("ом") {
        // masculine instrumental: Харковом -> Харків, Києвом -> Київ
        push(stem.to_string());
        if let Some(s) = stem.strip_suffix("ов") {
            push(format!("{s}ів"));
        }
        if let Some(s) = stem.strip_suffix("єв") {
            push(format!("{s}їв"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_pairs() {
        for (inflected, nominative) in [
            ("борзну", "борзна"),
            ("полтаву", "полтава"),
            ("сахновщину", "сахновщина"),
            ("вінницю", "вінниця"),
            ("михайлівку", "михайлівка"),
            ("івано-франківську", "івано-франківська"),
            // instrumental forms ("над Уманню", "за Одесою")
            ("уманню", "умань"),
            ("одесою", "одеса"),
            ("вінницею", "вінниця"),
        ] {
            assert_eq!(to_nominative(inflected), nominative);
        }
    }

    #[test]
    fn nominative_is_untouched() {
        for name in ["ніжин", "київ", "суми", "черкаси", "кривий ріг"] {
            assert_eq!(to_nominative(name), name);
        }
    }

    #[test]
    fn prefixes_stripped() {
        assert_eq!(strip_prefix("м. конотоп"), "конотоп");
        assert_eq!(strip_prefix("смт ворзель"), "ворзель");
        assert_eq!(strip_prefix("чернігів"), "чернігів");
    }

    #[test]
    fn variants_cover_locative() {
        let v = name_variants("полтаві");
        assert!(v.contains(&"полтава".to_string()), "{v:?}");
        let v = name_variants("харкові");
        assert!(v.contains(&"харків".to_string()), "{v:?}");
    }

    #[test]
    fn variants_cover_instrumental() {
        let v = name_variants("харковом");
        assert!(v.contains(&"харків".to_string()), "{v:?}");
        let v = name_variants("києвом");
        assert!(v.contains(&"київ".to_string()), "{v:?}");
        let v = name_variants("уманню");
        assert!(v.contains(&"умань".to_string()), "{v:?}");
    }
}
