//! Full-pipeline tests: raw channel text in, threat records out.

use std::sync::Arc;

use super::Engine;
use crate::config::EngineConfig;
use crate::gazetteer::cache::GeocodeCache;
use crate::gazetteer::GazetteerService;
use crate::geo::Coordinates;

fn offline_engine() -> Engine {
    Engine::new(
        EngineConfig::default(),
        Arc::new(GazetteerService::offline(GeocodeCache::memory())),
    )
}

#[tokio::test]
async fn simple_course_message() {
    let engine = offline_engine();
    let records = engine
        .process_message("3х шахеди курсом на Борзну", "m1", "2024-05-01T21:14:00Z", "monitor")
        .await;

    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.id, "m1_0_0");
    assert_eq!(r.place, "Борзна");
    assert_eq!(r.threat_type, "shahed");
    assert_eq!(r.count, 3);
    assert_eq!(r.channel, "monitor");
    assert!(r.trajectory.is_none());
}

#[tokio::test]
async fn empty_and_whitespace_input() {
    let engine = offline_engine();
    assert!(engine.process_message("", "m", "t", "c").await.is_empty());
    assert!(engine.process_message("  \n\n  ", "m", "t", "c").await.is_empty());
}

#[tokio::test]
async fn all_clear_produces_nothing() {
    let engine = offline_engine();
    let records = engine
        .process_message("Відбій тривоги! Загроза минула.", "m2", "t", "c")
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn no_threat_keyword_produces_nothing() {
    let engine = offline_engine();
    let records = engine
        .process_message("Гарного вечора, передача о 20:00 на каналі", "m3", "t", "c")
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn deterministic_output() {
    let engine = offline_engine();
    let text = "Шахеди з Чернігівщини курсом на Ніжин/Борзну";
    let a = engine.process_message(text, "m4", "t", "c").await;
    let b = engine.process_message(text, "m4", "t", "c").await;
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[tokio::test]
async fn slash_list_yields_two_records_with_sub_indices() {
    let engine = offline_engine();
    let records = engine
        .process_message("Шахеди курсом на Ніжин/Борзну", "m5", "t", "c")
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "m5_0_0");
    assert_eq!(records[0].place, "Ніжин");
    assert_eq!(records[1].id, "m5_0_1");
    assert_eq!(records[1].place, "Борзна");
}

#[tokio::test]
async fn duplicate_place_and_kind_collapse() {
    let engine = offline_engine();
    let records = engine
        .process_message("Шахеди на Київ!\nЩе група шахедів курсом на Київ", "m6", "t", "c")
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].place, "Київ");
    assert_eq!(records[0].threat_type, "shahed");
}

#[tokio::test]
async fn source_region_builds_real_trajectory() {
    let engine = offline_engine();
    let records = engine
        .process_message("Шахеди з Чернігівщини курсом на Ніжин", "m7", "t", "c")
        .await;

    assert_eq!(records.len(), 1);
    let t = records[0].trajectory.as_ref().expect("trajectory");
    // starts at the Chernihiv oblast centroid, ends at Nizhyn
    assert!((t.start.lat - 51.4982).abs() < 1e-4);
    assert!((t.end.lat - 51.0480).abs() < 1e-4);
}

#[tokio::test]
async fn direction_cue_projects_offset() {
    let engine = offline_engine();
    let records = engine
        .process_message("Група бпла зі сходу на Полтаву", "m8", "t", "c")
        .await;

    assert_eq!(records.len(), 1);
    let t = records[0].trajectory.as_ref().expect("trajectory");
    // "зі сходу" means heading west
    assert!(t.end.lng < t.start.lng);
    let d = crate::geo::haversine_km(t.start, t.end);
    assert!((d - 50.0).abs() < 1.0, "offset {d}");
}

#[tokio::test]
async fn multi_regional_digest() {
    let engine = offline_engine();
    let text = "⚡️ Чернігівщина:\n3х бпла курсом на Ніжин\n1х бпла на Борзну\nСумщина:\n2х шахеди курсом на Конотоп\nбпла курсом на південь";
    let records = engine.process_message(text, "d1", "t", "c").await;

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].place, "Ніжин");
    assert_eq!(records[1].place, "Борзна");
    assert_eq!(records[2].place, "Конотоп");
    assert_eq!(records[2].threat_type, "shahed");
    // the bare southbound course is anchored at the block's oblast centroid
    assert_eq!(records[3].place, "Сумська");
    assert_eq!(records[3].source_match, "region_course");
    let t = records[3].trajectory.as_ref().expect("trajectory");
    assert!(t.end.lat < t.start.lat);
}

#[tokio::test]
async fn same_digest_below_threshold_is_single_scope() {
    let engine = offline_engine();
    // two headers but only two threat lines: no multi-regional split, so
    // the mentions resolve without the oblast hints
    let text = "Чернігівщина:\n3х бпла курсом на Ніжин\nСумщина:\n2х шахеди курсом на Конотоп";
    let records = engine.process_message(text, "d2", "t", "c").await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source_match, "course_to");
}

#[tokio::test]
async fn out_of_country_resolution_is_dropped() {
    let cache = GeocodeCache::memory();
    cache.put("москву", Coordinates::new(55.7558, 37.6173), "remote");
    let engine = Engine::new(
        EngineConfig::default(),
        Arc::new(GazetteerService::new(cache, None)),
    );

    let records = engine
        .process_message("Ракета на Москву", "m9", "t", "c")
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn promo_noise_does_not_leak_into_records() {
    let engine = offline_engine();
    let text = "Шахеди курсом на Ніжин\n[Підписатися](https://t.me/chan)\n✙ підтримати канал ✙";
    let records = engine.process_message(text, "m10", "t", "c").await;

    assert_eq!(records.len(), 1);
    assert!(!records[0].text.contains("t.me"));
    assert!(!records[0].text.to_lowercase().contains("підписатися"));
}

#[tokio::test]
async fn raion_mention_resolves_to_raion_center() {
    let engine = offline_engine();
    let records = engine
        .process_message("КАБи по Вишгородському району Київщини", "m11", "t", "c")
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].threat_type, "guided_bomb");
    assert!((records[0].lat - 50.5850).abs() < 1e-4);
}
