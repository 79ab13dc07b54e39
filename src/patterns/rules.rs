//! The ordered extraction rule table.
//!
//! Every rule is a compiled regex with named capture roles (`count`,
//! `place`, `src`, `oblast`, `dir`). The matcher walks the table top to
//! bottom; byte ranges consumed by an earlier rule are never reconsidered
//! by a later one, so order here is priority. Stop conditions are encoded
//! as lazy place windows closed by a terminator class instead of lookahead,
//! which the `regex` crate does not have.

use once_cell::sync::Lazy;
use regex::Regex;

/// Place-name character window. Bounded and lazy; the terminator ends it.
const PLACE: &str = r"[а-яіїєґё'a-z0-9/\- ]{2,60}?";
/// Source-place window, slightly tighter (no slash lists on the source side).
const SRC: &str = r"[а-яіїєґё'a-z\- ]{3,40}?";
/// What ends a place capture: punctuation, line end, a conjunction, or the
/// start of a trailing clause.
const TERM: &str = r"(?:[.,;:!?()\[\]|•]|[–—]|$|\s+та\s|\s+і\s|\s+й\s|\s+у\s+бік|\s+курс)";

const COUNT: &str = r"(?:(?P<count>\d{1,3})\s*[xх×]?\s*)?";

pub struct Rule {
    pub id: &'static str,
    pub re: Regex,
    /// The place capture names a raion, not a settlement.
    pub raion: bool,
}

fn rule(id: &'static str, raion: bool, pattern: String) -> Rule {
    Rule {
        id,
        // table is built once at startup; a bad pattern is a programmer error
        re: Regex::new(&pattern).unwrap(),
        raion,
    }
}

pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // "з чернігівщини курсом на ніжин", "зі сходу на полтаву"
        rule(
            "course_from_to",
            false,
            format!(
                r"\b(?:з|зі|із)\s+(?P<src>{SRC})\s+(?:курс(?:ом)?\s+(?:на|у|в)|у\s+напрямку|в\s+напрямку|на)\s+(?P<place>{PLACE}){TERM}"
            ),
        ),
        // "від шостки до конотопа"
        rule(
            "course_from_to",
            false,
            format!(r"\bвід\s+(?P<src>{SRC})\s+(?:до|на|у\s+бік)\s+(?P<place>{PLACE}){TERM}"),
        ),
        // "3х бпла курсом на борзну"
        rule(
            "course_to",
            false,
            format!(
                r"(?:^|[\s:•(])(?:{COUNT})(?:шахед\w*|бпла|дрон\w*|ракет\w*|ціл\w*|груп\w*)?\s*курс(?:ом)?\s+(?:на|у|в)\s+(?P<place>{PLACE}){TERM}"
            ),
        ),
        // "у напрямку броварів", "в бік гостомеля"
        rule(
            "toward",
            false,
            format!(r"\b(?:(?:у|в)\s+напрямку|(?:у|в)\s+бік)\s+(?P<place>{PLACE}){TERM}"),
        ),
        // "через ніжин", "повз прилуки"
        rule(
            "via",
            false,
            format!(r"\b(?:через|повз)\s+(?P<place>{PLACE}){TERM}"),
        ),
        // "вишгородський район київщини", "у криворізькому районі"
        rule(
            "raion",
            true,
            format!(
                r"(?P<place>[а-яіїєґ'\-]+(?:ський|цький|зький|ському|цькому|зькому|ського|цького|зького))\s+район(?:і|у|ах)?(?:\s+(?P<oblast>[а-яіїєґ'\-]+(?:щин[аиі]|ччин[аиі])))?"
            ),
        ),
        // "в районі харкова", "на околицях сум", "біля чернігова", "над уманню"
        rule(
            "near",
            false,
            format!(
                r"\b(?:(?:в|у)\s+районі|на\s+околицях|біля|поблизу|неподалік|над)\s+(?P<place>{PLACE}){TERM}"
            ),
        ),
        // "➡️ конотоп"
        rule(
            "arrow",
            false,
            format!(r"(?P<dir>[➡⬅⬆⬇↗↘↙↖→←↑↓]+\u{{fe0f}}?)\s*(?:на\s+)?(?P<place>{PLACE}){TERM}"),
        ),
        // bare "на X" — the noisiest rule, so it goes last; a threat noun may
        // sit between the count and the trigger ("2х бпла на конотоп")
        rule(
            "on_place",
            false,
            format!(
                r"(?:^|[\s:•])(?:{COUNT})(?:шахед\w*|бпла|дрон\w*|ракет\w*|ціл\w*|груп\w*)?\s*на\s+(?P<place>{PLACE}){TERM}"
            ),
        ),
    ]
});

/// Region-header lines ("Чернігівщина:", "Сумська область —") anchor
/// multi-regional blocks. Returns the header name and the remainder of the
/// line after the delimiter.
pub static REGION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[^а-яіїєґa-z0-9]*(?P<name>[а-яіїєґ'\-]+(?:щина|ччина)|запоріжжя|волинь|буковина|закарпаття|прикарпаття|[а-яіїєґ'\-]+ька(?:\s+область|\s+обл\.?)?|[а-яіїєґ'\- ]+?\s+(?:область|обл\.|край))\s*[:\-–—](?P<rest>.*)$",
    )
    .unwrap()
});

/// Standalone "з <напрямку>" cue with no place attached.
pub static FROM_DIRECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:з|зі|із)\s+(?P<dir>(?:півн|півд|сход|схід|захід|заход)[а-яіїєґ\-]*(?:\s+(?:сходу|заходу|схід|захід))?)",
    )
    .unwrap()
});

const LOCATIVE_TRIGGERS: &[&str] = &[
    "курс",
    " на ",
    "напрямку",
    "в районі",
    "у районі",
    " бік ",
    "через ",
    "повз ",
    "біля ",
    "поблизу",
    "над ",
    "околиц",
];

/// Does this line talk about a place at all? Used by the segmenter's
/// threat-line count, not for extraction.
pub fn has_locative_trigger(lower: &str) -> bool {
    LOCATIVE_TRIGGERS.iter().any(|t| lower.contains(t))
        || lower.chars().any(|c| "➡⬅⬆⬇↗↘↙↖→←↑↓".contains(c))
}
