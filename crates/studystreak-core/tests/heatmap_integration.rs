//! Integration tests for the heatmap pipeline.
//!
//! Exercises the full workflow from session commit through aggregation,
//! level classification, grid building, the live overlay, and the
//! derived stats snapshot.

use chrono::NaiveDate;
use studystreak_core::storage::commit_session;
use studystreak_core::{
    aggregate_sessions, build_year_grid, user_stats, year_buckets, LevelThresholds, LiveSession,
    SessionStore, WeekStart,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_empty_history_yields_all_zero() {
    let store = SessionStore::open_memory().unwrap();
    let sessions = store.sessions_for_user("alice").unwrap();
    assert!(sessions.is_empty());

    let stats = user_stats(&sessions, date("2024-03-10"));
    assert_eq!(stats.total_sessions, 0);
    assert_eq!(stats.total_minutes, 0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 0);

    let totals = aggregate_sessions(&sessions);
    let buckets = year_buckets(2024, &totals, &LevelThresholds::default());
    assert!(buckets.iter().all(|b| b.level == 0));
}

#[test]
fn test_single_day_forty_five_minutes() {
    let store = SessionStore::open_memory().unwrap();
    commit_session(&store, Some("alice"), date("2024-03-10"), 45).unwrap();

    let sessions = store.sessions_for_user("alice").unwrap();
    let totals = aggregate_sessions(&sessions);
    let buckets = year_buckets(2024, &totals, &LevelThresholds::default());

    let day = buckets.iter().find(|b| b.date == date("2024-03-10")).unwrap();
    assert_eq!(day.total_minutes, 45);
    assert_eq!(day.level, 2);

    // Streak depends on the test clock's today.
    let stats = user_stats(&sessions, date("2024-03-10"));
    assert_eq!(stats.current_streak, 1);
    let stats = user_stats(&sessions, date("2024-03-20"));
    assert_eq!(stats.current_streak, 0);
}

#[test]
fn test_three_day_run_with_gap() {
    let store = SessionStore::open_memory().unwrap();
    for day in ["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-05"] {
        commit_session(&store, Some("alice"), date(day), 10).unwrap();
    }

    let sessions = store.sessions_for_user("alice").unwrap();
    let stats = user_stats(&sessions, date("2024-03-05"));
    assert_eq!(stats.longest_streak, 3);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.total_minutes, 40);
}

#[test]
fn test_live_overlay_over_stored_today() {
    let store = SessionStore::open_memory().unwrap();
    let today = date("2024-03-10");
    commit_session(&store, Some("alice"), today, 20).unwrap();

    let sessions = store.sessions_for_user("alice").unwrap();
    let totals = aggregate_sessions(&sessions);

    let started: chrono::DateTime<chrono::Utc> = "2024-03-10T09:00:00Z".parse().unwrap();
    let live = LiveSession::start("alice", started);
    let now = started + chrono::Duration::minutes(15);

    let view = studystreak_core::overlay_today(
        &totals,
        today,
        Some(live.tick(now)),
        Some(live.id),
        &LevelThresholds::default(),
    );
    assert_eq!(view.bucket.total_minutes, 35);
    assert_eq!(view.bucket.level, 2);
    assert!(view.is_live);

    // The stored aggregation is untouched by the read.
    assert_eq!(totals[&today], 20);
}

#[test]
fn test_commit_invalidates_live_tick() {
    let store = SessionStore::open_memory().unwrap();
    let started: chrono::DateTime<chrono::Utc> = "2024-03-10T09:00:00Z".parse().unwrap();
    let live = LiveSession::start("alice", started);
    let now = started + chrono::Duration::minutes(15);
    let stale_tick = live.tick(now);

    let committed = live.commit(now).unwrap();
    store.add_session(&committed).unwrap();

    let sessions = store.sessions_for_user("alice").unwrap();
    let totals = aggregate_sessions(&sessions);

    // The session no longer exists as a live one; its tick must not
    // double-count on top of the committed record.
    let view = studystreak_core::overlay_today(
        &totals,
        date("2024-03-10"),
        Some(stale_tick),
        None,
        &LevelThresholds::default(),
    );
    assert_eq!(view.bucket.total_minutes, 15);
    assert!(!view.is_live);
}

#[test]
fn test_grid_over_committed_year() {
    let store = SessionStore::open_memory().unwrap();
    commit_session(&store, Some("alice"), date("2024-01-01"), 200).unwrap();
    commit_session(&store, Some("alice"), date("2024-12-31"), 90).unwrap();
    // Spillover into another year stays out of the 2024 grid.
    commit_session(&store, Some("alice"), date("2023-12-31"), 60).unwrap();

    let sessions = store.sessions_for_user("alice").unwrap();
    let totals = aggregate_sessions(&sessions);
    let buckets = year_buckets(2024, &totals, &LevelThresholds::default());
    let grid = build_year_grid(2024, &buckets, WeekStart::Sunday);

    assert!(grid.weeks.iter().all(|w| w.slots.len() == 7));
    let days: Vec<_> = grid
        .weeks
        .iter()
        .flat_map(|w| w.slots.iter().flatten())
        .collect();
    assert_eq!(days.len(), 366);
    assert_eq!(days[0].level, 5);
    assert_eq!(days[365].level, 3);
    assert_eq!(grid.month_labels.iter().flatten().count(), 12);
}

#[test]
fn test_threshold_boundaries_through_pipeline() {
    let store = SessionStore::open_memory().unwrap();
    let expectations = [
        ("2024-06-01", 30, 2),
        ("2024-06-02", 60, 3),
        ("2024-06-03", 120, 4),
        ("2024-06-04", 180, 5),
    ];
    for (day, minutes, _) in expectations {
        commit_session(&store, Some("alice"), date(day), minutes).unwrap();
    }

    let sessions = store.sessions_for_user("alice").unwrap();
    let totals = aggregate_sessions(&sessions);
    let buckets = year_buckets(2024, &totals, &LevelThresholds::default());
    for (day, _, level) in expectations {
        let bucket = buckets.iter().find(|b| b.date == date(day)).unwrap();
        assert_eq!(bucket.level, level, "wrong level for {day}");
    }
}
