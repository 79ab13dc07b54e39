//! Threat taxonomy and the keyword tables that drive classification.
//!
//! Matching is dumb on purpose: lowercase substring search over ordered
//! stem lists. Stems are spelled so that one entry covers the whole
//! inflection family ("шахед" hits "шахеди", "шахедів", ...).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatKind {
    Ballistic,
    CruiseMissile,
    GuidedBomb,
    Shahed,
    ReconDrone,
    Aircraft,
    Artillery,
    Missile,
    Unknown,
}

impl ThreatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ballistic => "ballistic_missile",
            Self::CruiseMissile => "cruise_missile",
            Self::GuidedBomb => "guided_bomb",
            Self::Shahed => "shahed",
            Self::ReconDrone => "recon_uav",
            Self::Aircraft => "aviation",
            Self::Artillery => "artillery",
            Self::Missile => "missile",
            Self::Unknown => "unknown",
        }
    }

    /// Ukrainian display label, used for the map popup text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ballistic => "Балістика",
            Self::CruiseMissile => "Крилата ракета",
            Self::GuidedBomb => "КАБ",
            Self::Shahed => "Шахед",
            Self::ReconDrone => "Розвідувальний БпЛА",
            Self::Aircraft => "Авіація",
            Self::Artillery => "Артилерія",
            Self::Missile => "Ракета",
            Self::Unknown => "Загроза",
        }
    }

    pub fn marker_icon(&self) -> &'static str {
        match self {
            Self::Ballistic => "ballistic.png",
            Self::CruiseMissile => "cruise.png",
            Self::GuidedBomb => "kab.png",
            Self::Shahed => "shahed.png",
            Self::ReconDrone => "recon.png",
            Self::Aircraft => "aviation.png",
            Self::Artillery => "artillery.png",
            Self::Missile => "missile.png",
            Self::Unknown => "alert.png",
        }
    }
}

/// Classification table. Order matters: specific kinds come before the
/// generic ones so "балістична ракета" never falls through to `Missile`.
const THREAT_KEYWORDS: &[(ThreatKind, &[&str])] = &[
    (
        ThreatKind::Ballistic,
        &[
            "баліст", "іскандер", "кинджал", "кинжал", "циркон", "kn-23",
            "баллист",
        ],
    ),
    (
        ThreatKind::CruiseMissile,
        &[
            "крилат", "калібр", "х-101", "х-555", "х-59", "х-22", "х-31",
            "онікс", "крылат",
        ],
    ),
    (
        ThreatKind::GuidedBomb,
        &["каб", "керован", "авіабомб", "фаб", "умпк", "упаб"],
    ),
    (
        ThreatKind::Shahed,
        &[
            "шахед", "shahed", "геран", "гераней", "мопед", "ударн",
            "камікадзе", "шахид",
        ],
    ),
    (
        ThreatKind::ReconDrone,
        &["розвідувальн", "розвід", "орлан", "supercam", "разведыват"],
    ),
    (
        ThreatKind::Aircraft,
        &[
            "авіаці", "авиаци", "міг-31", "миг-31", "ту-95", "ту-22", "ту-160",
            "су-34", "су-35", "зліт", "злет", "взлет", "борт",
        ],
    ),
    (
        ThreatKind::Artillery,
        &["артилер", "артиллер", "рсзв", "рсзо", "обстріл", "обстрел"],
    ),
    (ThreatKind::Missile, &["ракет", "пуск"]),
    (
        ThreatKind::Unknown,
        &["бпла", "дрон", "безпілотн", "беспилотн", "uav", "загроз", "небезпек"],
    ),
];

/// All-clear markers. A message that is only an all-clear produces nothing.
const ALL_CLEAR_KEYWORDS: &[&str] = &[
    "відбій",
    "вiдбiй",
    "отбой",
    "загроза минула",
    "угроза миновала",
    "чисте небо",
    "тривогу знято",
    "відміна тривоги",
];

/// First matching table row wins; `Unknown` covers the generic drone and
/// "threat" vocabulary so the caller can still gate on keyword presence.
pub fn classify(lower: &str) -> Option<ThreatKind> {
    for (kind, stems) in THREAT_KEYWORDS {
        if stems.iter().any(|s| lower.contains(s)) {
            return Some(*kind);
        }
    }
    None
}

pub fn has_threat_keyword(lower: &str) -> bool {
    classify(lower).is_some()
}

pub fn is_all_clear(lower: &str) -> bool {
    ALL_CLEAR_KEYWORDS.iter().any(|s| lower.contains(s))
        && !has_launch_language(lower)
}

// An all-clear in one oblast is often followed by fresh launches in the
// same message; keep those messages in the pipeline.
fn has_launch_language(lower: &str) -> bool {
    ["пуск", "зліт", "курс", "швидкісн"]
        .iter()
        .any(|s| lower.contains(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_beats_generic() {
        assert_eq!(classify("пуски крилатих ракет з ту-95"), Some(ThreatKind::CruiseMissile));
        assert_eq!(classify("балістична ракета на дніпро"), Some(ThreatKind::Ballistic));
        assert_eq!(classify("ракета курсом на київ"), Some(ThreatKind::Missile));
    }

    #[test]
    fn shahed_family() {
        for text in ["шахеди на харків", "група ударних бпла", "гераней не видно"] {
            assert_eq!(classify(text), Some(ThreatKind::Shahed), "{text}");
        }
    }

    #[test]
    fn plain_uav_is_unknown_kind_but_still_a_threat() {
        assert_eq!(classify("бпла на чернігівщині"), Some(ThreatKind::Unknown));
        assert!(has_threat_keyword("бпла на чернігівщині"));
        assert_eq!(classify("добрий вечір ми з україни"), None);
    }

    #[test]
    fn all_clear_detection() {
        assert!(is_all_clear("відбій тривоги у києві"));
        assert!(is_all_clear("загроза минула"));
        assert!(!is_all_clear("відбій у львові, нові пуски на сході"));
        assert!(!is_all_clear("шахеди на харків"));
    }
}
