//! Direction words and arrows to bearings, and the short trajectory stubs
//! drawn from them.

use serde::Serialize;

use crate::geo::{self, Coordinates};

#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    pub start: Coordinates,
    pub end: Coordinates,
    /// The direction cue as written in the message.
    pub direction: String,
}

/// Compound directions must be checked before the simple ones, otherwise
/// "південний захід" matches plain "захід" first.
const COMPOUND_DIRECTIONS: &[(&str, f64)] = &[
    ("північно-схід", 45.0),
    ("північний схід", 45.0),
    ("північного сходу", 45.0),
    ("північно-захід", 315.0),
    ("північний захід", 315.0),
    ("північного заходу", 315.0),
    ("південно-схід", 135.0),
    ("південний схід", 135.0),
    ("південного сходу", 135.0),
    ("південно-захід", 225.0),
    ("південний захід", 225.0),
    ("південного заходу", 225.0),
    ("пн-сх", 45.0),
    ("пн-зх", 315.0),
    ("пд-сх", 135.0),
    ("пд-зх", 225.0),
];

const SIMPLE_DIRECTIONS: &[(&str, f64)] = &[
    ("північ", 0.0),
    ("півноч", 0.0),
    ("півден", 180.0),
    ("півдн", 180.0),
    ("півдня", 180.0),
    ("схід", 90.0),
    ("сход", 90.0),
    ("захід", 270.0),
    ("заход", 270.0),
];

const ARROWS: &[(char, f64)] = &[
    ('↑', 0.0),
    ('⬆', 0.0),
    ('↗', 45.0),
    ('→', 90.0),
    ('➡', 90.0),
    ('↘', 135.0),
    ('↓', 180.0),
    ('⬇', 180.0),
    ('↙', 225.0),
    ('←', 270.0),
    ('⬅', 270.0),
    ('↖', 315.0),
];

/// True when the token is direction vocabulary rather than a place name.
pub fn is_direction_word(token: &str) -> bool {
    parse_direction(token).is_some()
}

/// Bearing in degrees for a direction cue, `None` when the token carries no
/// recognizable direction. "з <напрямку>" means arriving *from* there, so
/// the heading flips.
pub fn parse_direction(token: &str) -> Option<f64> {
    let lower = token.trim().to_lowercase();
    let stripped = lower
        .strip_prefix("на ")
        .or_else(|| lower.strip_prefix("у "))
        .or_else(|| lower.strip_prefix("в "))
        .unwrap_or(&lower);

    let mut from_side = false;
    let mut core = stripped;
    for prefix in ["з ", "зі ", "із "] {
        if let Some(rest) = stripped.strip_prefix(prefix) {
            from_side = true;
            core = rest.trim_start();
            break;
        }
    }

    // stems anchor to the token start; a settlement that merely embeds a
    // direction stem ("східниця") must not parse as a cue
    let mut bearing = None;
    for (stem, b) in COMPOUND_DIRECTIONS {
        if core.starts_with(stem) {
            bearing = Some(*b);
            break;
        }
    }
    if bearing.is_none() {
        let first_word = core.split_whitespace().next().unwrap_or("");
        for (stem, b) in SIMPLE_DIRECTIONS {
            if let Some(tail) = first_word.strip_prefix(stem) {
                // a short tail is an inflection ("сходу", "східний"), a
                // longer one is a different word entirely
                if tail.chars().count() <= 3 {
                    bearing = Some(*b);
                    break;
                }
            }
        }
    }
    if bearing.is_none() {
        for c in core.chars() {
            if let Some((_, b)) = ARROWS.iter().find(|(a, _)| a == &c) {
                bearing = Some(*b);
                break;
            }
        }
    }

    bearing.map(|b| if from_side { (b + 180.0) % 360.0 } else { b })
}

/// Synthetic stub from `anchor` along the cue's bearing.
pub fn project(anchor: Coordinates, token: &str, offset_km: f64) -> Option<Trajectory> {
    let bearing = parse_direction(token)?;
    let end = geo::destination_point(anchor, bearing, offset_km);
    Some(Trajectory {
        start: anchor,
        end,
        direction: token.trim().to_string(),
    })
}

/// Real segment between a resolved source and target.
pub fn between(source: Coordinates, target: Coordinates, cue: &str) -> Trajectory {
    Trajectory {
        start: source,
        end: target,
        direction: cue.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{bearing_deg, haversine_km};

    #[test]
    fn southwest_projection_from_reference_point() {
        let t = project(Coordinates::new(50.0, 30.0), "на південний захід", 50.0)
            .expect("direction must parse");
        let b = bearing_deg(t.start, t.end);
        let d = haversine_km(t.start, t.end);
        assert!((b - 225.0).abs() < 5.0, "bearing {b}");
        assert!((d - 50.0).abs() < 1.0, "distance {d}");
    }

    #[test]
    fn compound_wins_over_simple() {
        assert_eq!(parse_direction("північно-східний"), Some(45.0));
        assert_eq!(parse_direction("схід"), Some(90.0));
    }

    #[test]
    fn from_side_flips_heading() {
        assert_eq!(parse_direction("зі сходу"), Some(270.0));
        assert_eq!(parse_direction("з півночі"), Some(180.0));
    }

    #[test]
    fn arrows_parse() {
        assert_eq!(parse_direction("↙"), Some(225.0));
        assert_eq!(parse_direction("➡️"), Some(90.0));
    }

    #[test]
    fn non_direction_words_do_not_parse() {
        assert!(parse_direction("київ").is_none());
        assert!(!is_direction_word("нові петрівці"));
        // settlements embedding a direction stem stay places
        assert!(!is_direction_word("східниця"));
        assert!(!is_direction_word("на східницю"));
    }
}
