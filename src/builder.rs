//! Assembles final threat records from resolved mentions.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::gazetteer::Resolution;
use crate::geo;
use crate::patterns::ExtractedMention;
use crate::threat::ThreatKind;
use crate::trajectory::Trajectory;

const EXCERPT_CHARS: usize = 500;

#[derive(Debug, Clone, Serialize)]
pub struct ThreatRecord {
    /// `{message_id}_{mention_index}_{sub_index}`; stable across reruns.
    pub id: String,
    pub place: String,
    pub lat: f64,
    pub lng: f64,
    pub threat_type: &'static str,
    pub marker_icon: &'static str,
    pub source_match: &'static str,
    pub count: u32,
    pub text: String,
    pub date: String,
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<Trajectory>,
    #[serde(skip_serializing_if = "is_false")]
    pub low_confidence: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Message-level fields shared by every record.
pub struct MessageMeta<'a> {
    pub message_id: &'a str,
    pub timestamp: &'a str,
    pub channel: &'a str,
    pub excerpt: String,
}

impl<'a> MessageMeta<'a> {
    pub fn new(message_id: &'a str, timestamp: &'a str, channel: &'a str, text: &str) -> Self {
        Self {
            message_id,
            timestamp,
            channel,
            excerpt: excerpt(text),
        }
    }
}

/// Truncates on a char boundary; telegram digests run long.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    text.chars().take(EXCERPT_CHARS).collect()
}

/// "біла церква" -> "Біла Церква", "кам'янець-подільський" keeps both caps.
pub fn title_case(name: &str) -> String {
    fn cap(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
    name.split(' ')
        .map(|w| w.split('-').map(cap).collect::<Vec<_>>().join("-"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-message dedup: one record per (place, kind).
pub struct Deduper {
    seen: HashSet<(String, ThreatKind)>,
}

impl Deduper {
    pub fn new() -> Self {
        Self { seen: HashSet::new() }
    }

    pub fn admit(&mut self, place: &str, kind: ThreatKind) -> bool {
        self.seen.insert((place.to_string(), kind))
    }
}

impl Default for Deduper {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds one record, or `None` when it falls outside Ukraine or repeats
/// an already-admitted (place, kind) pair.
pub fn build_record(
    mention: &ExtractedMention,
    resolution: &Resolution,
    kind: ThreatKind,
    trajectory: Option<Trajectory>,
    meta: &MessageMeta<'_>,
    dedup: &mut Deduper,
) -> Option<ThreatRecord> {
    let coords = resolution.coords;
    if !geo::is_within_ukraine(coords) {
        debug!("'{}' resolved outside Ukraine, dropped", resolution.canonical);
        return None;
    }
    if !dedup.admit(&resolution.canonical, kind) {
        debug!("duplicate ({}, {}), dropped", resolution.canonical, kind.as_str());
        return None;
    }

    Some(ThreatRecord {
        id: format!(
            "{}_{}_{}",
            meta.message_id, mention.mention_idx, mention.sub_idx
        ),
        place: title_case(&resolution.canonical),
        lat: coords.lat,
        lng: coords.lng,
        threat_type: kind.as_str(),
        marker_icon: kind.marker_icon(),
        source_match: mention.pattern_id,
        count: mention.count,
        text: meta.excerpt.clone(),
        date: meta.timestamp.to_string(),
        channel: meta.channel.to_string(),
        trajectory,
        low_confidence: resolution.low_confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_multiword() {
        assert_eq!(title_case("біла церква"), "Біла Церква");
        assert_eq!(title_case("івано-франківськ"), "Івано-Франківськ");
        assert_eq!(title_case("київ"), "Київ");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let long = "ї".repeat(600);
        let e = excerpt(&long);
        assert_eq!(e.chars().count(), EXCERPT_CHARS);
    }

    #[test]
    fn deduper_admits_once_per_pair() {
        let mut d = Deduper::new();
        assert!(d.admit("київ", ThreatKind::Shahed));
        assert!(!d.admit("київ", ThreatKind::Shahed));
        assert!(d.admit("київ", ThreatKind::Ballistic));
        assert!(d.admit("ніжин", ThreatKind::Shahed));
    }
}
