//! Pattern extraction: turns one normalized, lowercased line into place
//! mentions and direction cues.

pub mod rules;

use tracing::debug;

use crate::trajectory;
pub use self::rules::has_locative_trigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKindHint {
    City,
    Raion,
}

#[derive(Debug, Clone)]
pub struct ExtractedMention {
    pub raw_place: String,
    pub count: u32,
    pub direction_token: Option<String>,
    pub source_place: Option<String>,
    pub oblast_hint: Option<String>,
    pub pattern_id: &'static str,
    pub kind_hint: PlaceKindHint,
    /// Ordinal of the pattern match within the message.
    pub mention_idx: usize,
    /// Ordinal within a slash-list expansion, 0 otherwise.
    pub sub_idx: usize,
    /// The line the mention came from, kept for the record excerpt.
    pub line: String,
}

/// Output of one line: the mentions plus any line-level direction cues that
/// were not attached to a specific mention.
#[derive(Debug, Default)]
pub struct LineExtraction {
    pub mentions: Vec<ExtractedMention>,
    pub cues: Vec<String>,
}

/// Region headers never become mentions; the segmenter owns them.
pub fn region_header(line: &str) -> Option<(String, String)> {
    let lower = line.trim().to_lowercase();
    let caps = rules::REGION_HEADER.captures(&lower)?;
    let name = caps.name("name")?.as_str().trim().to_string();
    let rest = caps
        .name("rest")
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    Some((name, rest))
}

fn overlaps(consumed: &[(usize, usize)], start: usize, end: usize) -> bool {
    consumed.iter().any(|(s, e)| start < *e && end > *s)
}

/// Trims capture debris: stray punctuation, emoji, dangling conjunctions.
fn clean_place(raw: &str) -> String {
    let mut s = raw
        .trim()
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_string();
    for tail in [" та", " і", " й", " область", " обл"] {
        if let Some(stripped) = s.strip_suffix(tail) {
            s = stripped.trim_end().to_string();
        }
    }
    s
}

/// Extracts mentions from one lowercased line. `next_idx` numbers pattern
/// matches across the whole message so record ids stay deterministic.
pub fn extract_line(line: &str, next_idx: &mut usize) -> LineExtraction {
    let mut out = LineExtraction::default();
    let mut consumed: Vec<(usize, usize)> = Vec::new();

    for rule in rules::RULES.iter() {
        for caps in rule.re.captures_iter(line) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            if overlaps(&consumed, whole.start(), whole.end()) {
                continue;
            }

            let place = caps
                .name("place")
                .map(|m| clean_place(m.as_str()))
                .unwrap_or_default();
            if place.is_empty() {
                continue;
            }

            let count = caps
                .name("count")
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(1);
            let mut direction = caps.name("dir").map(|m| m.as_str().to_string());
            let mut source = caps.name("src").map(|m| clean_place(m.as_str()));
            let oblast_hint = caps.name("oblast").map(|m| m.as_str().to_string());

            // a direction word on the source side is a cue, not a place
            if let Some(src) = &source {
                if trajectory::is_direction_word(src) {
                    direction = Some(format!("з {src}"));
                    source = None;
                }
            }
            // a direction word where a place was expected re-routes the
            // whole match into a line-level cue
            if trajectory::is_direction_word(&place) {
                let cue = format!("на {place}");
                debug!("direction cue instead of place: '{cue}'");
                out.cues.push(cue);
                consumed.push((whole.start(), whole.end()));
                continue;
            }

            consumed.push((whole.start(), whole.end()));
            let mention_idx = *next_idx;
            *next_idx += 1;

            let kind_hint = if rule.raion {
                PlaceKindHint::Raion
            } else {
                PlaceKindHint::City
            };

            // slash lists share count, direction and index; only the
            // sub-ordinal differs
            for (sub_idx, segment) in place.split('/').enumerate() {
                let segment = clean_place(segment);
                if segment.is_empty() {
                    continue;
                }
                out.mentions.push(ExtractedMention {
                    raw_place: segment,
                    count,
                    direction_token: direction.clone(),
                    source_place: source.clone(),
                    oblast_hint: oblast_hint.clone(),
                    pattern_id: rule.id,
                    kind_hint,
                    mention_idx,
                    sub_idx,
                    line: line.to_string(),
                });
            }
        }
    }

    // standalone "з <напрямку>" on a line with no extracted direction yet
    if out.mentions.iter().all(|m| m.direction_token.is_none()) {
        for caps in rules::FROM_DIRECTION.captures_iter(line) {
            if let Some(dir) = caps.name("dir") {
                let whole = match caps.get(0) {
                    Some(m) => m,
                    None => continue,
                };
                if overlaps(&consumed, whole.start(), whole.end()) {
                    continue;
                }
                let token = format!("з {}", dir.as_str().trim());
                if trajectory::is_direction_word(&token) {
                    out.cues.push(token);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(line: &str) -> LineExtraction {
        let mut idx = 0;
        extract_line(line, &mut idx)
    }

    #[test]
    fn course_to_with_count() {
        let got = extract("3х бпла курсом на борзну");
        assert_eq!(got.mentions.len(), 1);
        let m = &got.mentions[0];
        assert_eq!(m.raw_place, "борзну");
        assert_eq!(m.count, 3);
        assert_eq!(m.pattern_id, "course_to");
    }

    #[test]
    fn course_from_to_carries_source() {
        let got = extract("група шахедів з чернігівщини курсом на ніжин");
        assert_eq!(got.mentions.len(), 1);
        let m = &got.mentions[0];
        assert_eq!(m.raw_place, "ніжин");
        assert_eq!(m.source_place.as_deref(), Some("чернігівщини"));
    }

    #[test]
    fn direction_source_becomes_cue() {
        let got = extract("бпла зі сходу на полтаву");
        assert_eq!(got.mentions.len(), 1);
        let m = &got.mentions[0];
        assert_eq!(m.raw_place, "полтаву");
        assert!(m.source_place.is_none());
        assert_eq!(m.direction_token.as_deref(), Some("з сходу"));
    }

    #[test]
    fn direction_as_place_reroutes_to_cue() {
        let got = extract("ракета курсом на південний захід");
        assert!(got.mentions.is_empty());
        assert_eq!(got.cues, vec!["на південний захід".to_string()]);
    }

    #[test]
    fn slash_list_expands_with_sub_indices() {
        let got = extract("шахеди курсом на ніжин/борзну");
        assert_eq!(got.mentions.len(), 2);
        assert_eq!(got.mentions[0].raw_place, "ніжин");
        assert_eq!(got.mentions[0].sub_idx, 0);
        assert_eq!(got.mentions[1].raw_place, "борзну");
        assert_eq!(got.mentions[1].sub_idx, 1);
        assert_eq!(got.mentions[0].mention_idx, got.mentions[1].mention_idx);
    }

    #[test]
    fn raion_with_oblast_hint() {
        let got = extract("кaб по вишгородському району київщини");
        // latin 'a' typo in "кaб" must not matter for extraction
        let raion: Vec<_> = got
            .mentions
            .iter()
            .filter(|m| m.kind_hint == PlaceKindHint::Raion)
            .collect();
        assert_eq!(raion.len(), 1);
        assert_eq!(raion[0].raw_place, "вишгородському");
        assert_eq!(raion[0].oblast_hint.as_deref(), Some("київщини"));
    }

    #[test]
    fn consumed_span_not_rematched_by_later_rule() {
        let got = extract("бпла курсом на конотоп");
        // "на конотоп" must not also fire the bare on_place rule
        assert_eq!(got.mentions.len(), 1);
        assert_eq!(got.mentions[0].pattern_id, "course_to");
    }

    #[test]
    fn bare_on_place_keeps_count() {
        let got = extract("2х бпла на конотоп");
        assert_eq!(got.mentions.len(), 1);
        let m = &got.mentions[0];
        assert_eq!(m.raw_place, "конотоп");
        assert_eq!(m.count, 2);
        assert_eq!(m.pattern_id, "on_place");
    }

    #[test]
    fn near_rule() {
        let got = extract("вибухи в районі харкова");
        assert_eq!(got.mentions.len(), 1);
        assert_eq!(got.mentions[0].raw_place, "харкова");
        assert_eq!(got.mentions[0].pattern_id, "near");
    }

    #[test]
    fn region_header_detected() {
        let (name, rest) = region_header("⚡️ Чернігівщина:").unwrap();
        assert_eq!(name, "чернігівщина");
        assert!(rest.is_empty());

        let (name, rest) = region_header("Сумська область: бпла на ромни").unwrap();
        assert_eq!(name, "сумська область");
        assert_eq!(rest, "бпла на ромни");

        assert!(region_header("шахеди курсом на київ").is_none());
    }

    #[test]
    fn standalone_from_direction_cue() {
        let got = extract("загроза пусків з південного сходу");
        assert!(got.mentions.is_empty());
        assert_eq!(got.cues, vec!["з південного сходу".to_string()]);
    }
}
