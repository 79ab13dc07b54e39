//! End-to-end pipeline: normalize, segment, extract, resolve, build.

#[cfg(test)]
mod engine_tests;

use std::sync::Arc;

use tracing::debug;

use crate::builder::{self, Deduper, MessageMeta, ThreatRecord};
use crate::config::EngineConfig;
use crate::gazetteer::cache::GeocodeCache;
use crate::gazetteer::geocoder::{HttpGeocoder, RemoteGeocoder};
use crate::gazetteer::{GazetteerService, Resolution};
use crate::patterns::{self, ExtractedMention, PlaceKindHint};
use crate::segmenter;
use crate::threat::{self, ThreatKind};
use crate::trajectory::{self, Trajectory};
use crate::{normalize, segmenter::MessageBlock};

pub struct Engine {
    cfg: EngineConfig,
    gazetteer: Arc<GazetteerService>,
}

impl Engine {
    pub fn new(cfg: EngineConfig, gazetteer: Arc<GazetteerService>) -> Self {
        Self { cfg, gazetteer }
    }

    /// Wires the whole stack from environment variables.
    pub fn from_env() -> Self {
        let cfg = EngineConfig::from_env();
        let cache = match &cfg.cache_path {
            Some(path) => GeocodeCache::load(path),
            None => GeocodeCache::memory(),
        };
        let remote: Option<Arc<dyn RemoteGeocoder>> =
            if cfg.geocoder_enabled && !cfg.geocoder_api_key.is_empty() {
                Some(Arc::new(HttpGeocoder::new(
                    cfg.geocoder_endpoint.clone(),
                    cfg.geocoder_api_key.clone(),
                    cfg.geocoder_timeout,
                )))
            } else {
                None
            };
        Self::new(cfg, Arc::new(GazetteerService::new(cache, remote)))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// The single entry point. Never fails: a mention that cannot be
    /// resolved is logged and skipped, and the worst input yields an empty
    /// vec. Identical arguments produce identical output.
    pub async fn process_message(
        &self,
        text: &str,
        message_id: &str,
        timestamp: &str,
        channel: &str,
    ) -> Vec<ThreatRecord> {
        let cleaned = normalize::normalize(text);
        if cleaned.trim().is_empty() {
            return Vec::new();
        }
        let lower_all = cleaned.to_lowercase();
        if threat::is_all_clear(&lower_all) {
            debug!("all-clear message {message_id}, no records");
            return Vec::new();
        }
        if !threat::has_threat_keyword(&lower_all) {
            return Vec::new();
        }

        let meta = MessageMeta::new(message_id, timestamp, channel, &cleaned);
        let blocks = segmenter::segment(&cleaned, &self.cfg);

        let mut records = Vec::new();
        let mut dedup = Deduper::new();
        let mut next_idx = 0usize;

        for block in &blocks {
            let block_lower = block.lines.join("\n").to_lowercase();
            let scope_kind = threat::classify(&block_lower).unwrap_or(ThreatKind::Unknown);

            for line in &block.lines {
                let lower = line.to_lowercase();
                let mut extraction = patterns::extract_line(&lower, &mut next_idx);
                let line_cue = extraction.cues.first().cloned();

                if extraction.mentions.is_empty() {
                    if let (Some(cue), Some(region)) = (&line_cue, &block.region_hint) {
                        extraction
                            .mentions
                            .push(region_course_mention(region, cue, &lower, &mut next_idx));
                    }
                }

                for mention in &extraction.mentions {
                    // a threat keyword on the mention's own line overrides
                    // the block-wide classification
                    let kind = threat::classify(&lower).unwrap_or(scope_kind);

                    let Some(resolution) = self.resolve_mention(mention, block).await else {
                        continue;
                    };

                    let trajectory = self
                        .build_trajectory(mention, &resolution, line_cue.as_deref(), block)
                        .await;

                    if let Some(record) = builder::build_record(
                        mention,
                        &resolution,
                        kind,
                        trajectory,
                        &meta,
                        &mut dedup,
                    ) {
                        records.push(record);
                    }
                }
            }
        }

        records
    }

    async fn resolve_mention(
        &self,
        mention: &ExtractedMention,
        block: &MessageBlock,
    ) -> Option<Resolution> {
        let hint = mention
            .oblast_hint
            .as_deref()
            .or(block.region_hint.as_deref());

        if mention.kind_hint == PlaceKindHint::Raion {
            if let Some(raion) = self.gazetteer.resolve_raion(&mention.raw_place, hint) {
                return Some(raion);
            }
        }

        match self.gazetteer.resolve(&mention.raw_place, hint).await {
            Ok(resolution) => {
                debug!(
                    "'{}' -> {} via {}",
                    mention.raw_place, resolution.canonical, resolution.tier
                );
                Some(resolution)
            }
            Err(e) => {
                debug!("mention '{}' dropped: {e}", mention.raw_place);
                None
            }
        }
    }

    async fn build_trajectory(
        &self,
        mention: &ExtractedMention,
        resolution: &Resolution,
        line_cue: Option<&str>,
        block: &MessageBlock,
    ) -> Option<Trajectory> {
        if let Some(src) = &mention.source_place {
            if let Ok(source) = self
                .gazetteer
                .resolve(src, block.region_hint.as_deref())
                .await
            {
                let label = mention
                    .direction_token
                    .as_deref()
                    .unwrap_or(src.as_str());
                return Some(trajectory::between(source.coords, resolution.coords, label));
            }
        }

        let cue = mention.direction_token.as_deref().or(line_cue)?;
        trajectory::project(resolution.coords, cue, self.cfg.trajectory_offset_km)
    }
}

fn region_course_mention(
    region: &str,
    cue: &str,
    line: &str,
    next_idx: &mut usize,
) -> ExtractedMention {
    let mention_idx = *next_idx;
    *next_idx += 1;
    debug!("region-anchored course: {region} {cue}");
    ExtractedMention {
        raw_place: region.to_string(),
        count: 1,
        direction_token: Some(cue.to_string()),
        source_place: None,
        oblast_hint: None,
        pattern_id: "region_course",
        kind_hint: PlaceKindHint::City,
        mention_idx,
        sub_idx: 0,
        line: line.to_string(),
    }
}
