//! Message cleanup before any extraction runs.
//!
//! `normalize` is pure and idempotent; line structure survives because the
//! segmenter keys off it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::threat;

// Promo links are removed label and all; other markdown links keep the label.
static PROMO_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\((?:https?://)?t\.me/[^)]*\)").unwrap());
static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\((?:https?|tg)://[^)]*\)").unwrap());
static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
// ✙-framed channel signatures, with or without the closing cross.
static SIGNATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"✙[^✙\n]*✙?").unwrap());

/// Lines matching any of these stems are channel boilerplate, dropped only
/// when the rest of the message still carries a threat keyword.
const PROMO_STEMS: &[&str] = &[
    "підписатися",
    "підписатись",
    "підписуйтесь",
    "підписка",
    "надіслати новину",
    "надіслати фото",
    "підтримати канал",
    "підтримати нас",
    "донат",
    "monobank",
    "банка",
    "подписаться",
    "подписывайтесь",
    "поддержать канал",
    "прислать новость",
];

const APOSTROPHES: &[char] = &['’', 'ʼ', '`', '´', '‘'];

fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200b}'..='\u{200f}' | '\u{feff}' | '\u{2060}' | '\u{00ad}')
}

fn is_exotic_space(c: char) -> bool {
    c != '\n' && c != ' ' && c.is_whitespace()
}

// A line is decorative when nothing in it is a letter or digit.
fn is_decorative(line: &str) -> bool {
    !line.is_empty() && !line.chars().any(|c| c.is_alphanumeric())
}

fn is_promo(lower_line: &str) -> bool {
    PROMO_STEMS.iter().any(|s| lower_line.contains(s))
}

/// Strips channel noise while preserving line structure.
pub fn normalize(raw: &str) -> String {
    let mut text: String = raw
        .chars()
        .filter(|c| !is_zero_width(*c))
        .map(|c| {
            if is_exotic_space(c) {
                ' '
            } else if APOSTROPHES.contains(&c) {
                '\''
            } else {
                c
            }
        })
        .collect();

    text = PROMO_LINK.replace_all(&text, "").into_owned();
    text = MD_LINK.replace_all(&text, "$1").into_owned();
    text = BARE_URL.replace_all(&text, "").into_owned();
    text = SIGNATURE.replace_all(&text, "").into_owned();

    let lines: Vec<&str> = text.lines().map(|l| l.trim()).collect();
    let lowered: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if is_decorative(line) {
            continue;
        }
        if is_promo(&lowered[i]) {
            // Drop boilerplate only when a threat keyword survives elsewhere,
            // so pure promo posts pass through untouched.
            let threat_elsewhere = lowered
                .iter()
                .enumerate()
                .any(|(j, l)| j != i && threat::has_threat_keyword(l));
            if threat_elsewhere {
                continue;
            }
        }
        // blank lines carry nothing the segmenter or extractor reads, and
        // keeping them would depend on which neighbours got dropped above
        if line.is_empty() {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent() {
        let raw = "🚀 Ракета на Київ!\n\n\n[Підписатися](https://t.me/chan)\n✙ канал ✙\nдеталі: https://example.com/x";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn strips_promo_links_and_signatures() {
        let raw = "Шахеди курсом на Ніжин\n[Підтримати канал](https://t.me/abc)\n✙ Канал про тривоги ✙";
        let out = normalize(raw);
        assert_eq!(out, "Шахеди курсом на Ніжин");
    }

    #[test]
    fn keeps_label_of_ordinary_links() {
        let raw = "Балістика, деталі у [зведенні](https://example.com/post)";
        assert_eq!(normalize(raw), "Балістика, деталі у зведенні");
    }

    #[test]
    fn promo_kept_when_no_threat_elsewhere() {
        let raw = "Підтримати канал: донат у описі";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn unifies_apostrophes_and_zero_width() {
        let raw = "Слов\u{2019}янськ\u{200b} під обстрілом";
        assert_eq!(normalize(raw), "Слов'янськ під обстрілом");
    }

    #[test]
    fn collapses_blank_runs_and_decorative_lines() {
        let raw = "Шахеди на Суми\n———\n\n\n⬇️⬇️⬇️\nще група на Ромни";
        assert_eq!(normalize(raw), "Шахеди на Суми\nще група на Ромни");

        // decorative line inside a blank run, both orderings
        let raw = "Шахеди на Суми\n\n———\n\nще група на Ромни";
        assert_eq!(normalize(raw), "Шахеди на Суми\nще група на Ромни");
    }
}
