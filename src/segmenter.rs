//! Splits a normalized message into region-scoped blocks.
//!
//! Most messages are single-shot. The digest form ("Чернігівщина: ...",
//! "Сумщина: ...") only kicks in past both thresholds, so a stray header
//! look-alike cannot shred an ordinary message.

use tracing::debug;

use crate::config::EngineConfig;
use crate::patterns;
use crate::threat;

#[derive(Debug)]
pub struct MessageBlock {
    /// Region header this block is anchored to, as written (lowercased).
    pub region_hint: Option<String>,
    pub lines: Vec<String>,
}

pub fn segment(text: &str, cfg: &EngineConfig) -> Vec<MessageBlock> {
    let lines: Vec<&str> = text.lines().collect();

    let mut headers = 0usize;
    let mut threat_lines = 0usize;
    for line in &lines {
        if patterns::region_header(line).is_some() {
            headers += 1;
            continue;
        }
        let lower = line.to_lowercase();
        if threat::has_threat_keyword(&lower) && patterns::has_locative_trigger(&lower) {
            threat_lines += 1;
        }
    }

    let multi = headers >= cfg.multi_region_min_headers
        && threat_lines >= cfg.multi_region_min_threat_lines;

    if !multi {
        return vec![MessageBlock {
            region_hint: None,
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }];
    }
    debug!("multi-regional message: {headers} headers, {threat_lines} threat lines");

    let mut blocks: Vec<MessageBlock> = Vec::new();
    let mut current = MessageBlock {
        region_hint: None,
        lines: Vec::new(),
    };
    for line in &lines {
        match patterns::region_header(line) {
            Some((name, rest)) => {
                if !current.lines.is_empty() {
                    blocks.push(current);
                }
                current = MessageBlock {
                    region_hint: Some(name),
                    lines: Vec::new(),
                };
                if !rest.is_empty() {
                    current.lines.push(rest);
                }
            }
            None => current.lines.push(line.to_string()),
        }
    }
    if !current.lines.is_empty() || current.region_hint.is_some() {
        blocks.push(current);
    }
    blocks
}
