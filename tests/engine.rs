use std::collections::BTreeSet;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use dining_log::domain::check_in::CheckIn;
use dining_log::domain::types::Rating;
use dining_log::engine::avatars::avatar_stack;
use dining_log::engine::city_groups::group_by_city;
use dining_log::engine::date_buckets::{DayKind, group_by_day};
use dining_log::engine::locale::EnUs;
use dining_log::engine::place_filter::{
    PlaceFilterState, available_cuisines, filter_places, matches,
};

mod common;

/// `days_ago` days before `now`, at `hour:00` local time, as a UTC instant.
fn local(now: &DateTime<FixedOffset>, days_ago: i64, hour: u32) -> DateTime<Utc> {
    let day = now.date_naive() - Duration::days(days_ago);
    day.and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_local_timezone(*now.offset())
        .unwrap()
        .with_timezone(&Utc)
}

fn sample_check_ins(now: &DateTime<FixedOffset>) -> Vec<CheckIn> {
    vec![
        common::check_in("a", local(now, 10, 19), Rating::Neutral),
        common::check_in("b", local(now, 0, 9), Rating::Loved),
        common::check_in("c", local(now, 1, 12), Rating::Disliked),
        common::check_in("d", local(now, 0, 13), Rating::Loved),
        common::check_in("e", local(now, 3, 20), Rating::Neutral),
    ]
}

#[test]
fn buckets_cover_every_check_in_exactly_once() {
    let now = common::tokyo_now();
    let check_ins = sample_check_ins(&now);

    let buckets = group_by_day(&check_ins, &now, &EnUs);

    let mut ids: Vec<&str> = buckets
        .iter()
        .flat_map(|b| b.check_ins.iter().map(|c| c.id.as_str()))
        .collect();
    ids.sort();
    assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    assert!(buckets.iter().all(|b| !b.check_ins.is_empty()));

    let days: BTreeSet<_> = buckets.iter().map(|b| b.day).collect();
    assert_eq!(days.len(), buckets.len());
}

#[test]
fn buckets_put_relative_days_first_then_newest() {
    let now = common::tokyo_now();
    let check_ins = sample_check_ins(&now);

    let buckets = group_by_day(&check_ins, &now, &EnUs);

    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Today", "Yesterday", "Mar 12, 2024", "Mar 5, 2024"]);
    assert_eq!(buckets[0].kind, DayKind::Today);
    assert_eq!(buckets[1].kind, DayKind::Yesterday);
    assert_eq!(buckets[3].kind, DayKind::Other);

    let today: Vec<&str> = buckets[0].check_ins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(today, ["d", "b"]);
}

#[test]
fn buckets_use_the_local_calendar_day() {
    let now = common::tokyo_now();
    // 23:30 UTC on the 14th is already the 15th in Tokyo.
    let late = common::check_in("late", common::utc(2024, 3, 14, 23, 30), Rating::Loved);

    let buckets = group_by_day(std::slice::from_ref(&late), &now, &EnUs);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].kind, DayKind::Today);
}

#[test]
fn regrouping_is_stable() {
    let now = common::tokyo_now();
    let check_ins = sample_check_ins(&now);

    let first = group_by_day(&check_ins, &now, &EnUs);
    let flattened: Vec<CheckIn> = first
        .iter()
        .flat_map(|b| b.check_ins.iter().map(|c| (*c).clone()))
        .collect();
    let second = group_by_day(&flattened, &now, &EnUs);

    assert_eq!(first, second);
}

#[test]
fn no_check_ins_means_no_buckets() {
    let now = common::tokyo_now();
    assert!(group_by_day(&[], &now, &EnUs).is_empty());
}

#[test]
fn empty_filter_keeps_everything_in_order() {
    let places = vec![
        common::place("1", "Tsuta Ramen", "Ramen", Rating::Loved),
        common::place("2", "Sushi Saito", "Sushi", Rating::Neutral),
        common::place("3", "Afuri", "Ramen", Rating::Disliked),
    ];

    let kept = filter_places(&places, &PlaceFilterState::new(), &EnUs);

    let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(available_cuisines(&places), ["Ramen", "Sushi"]);
}

#[test]
fn filter_combines_search_and_facets() {
    let places = vec![
        common::place("1", "Tsuta Ramen", "Ramen", Rating::Loved),
        common::place("2", "Sushi Saito", "Sushi", Rating::Neutral),
        common::place("3", "Afuri", "Ramen", Rating::Disliked),
    ];

    let search = PlaceFilterState::new().with_search_query("ramen");
    assert!(matches(&places[0], &search));

    let narrowed = search.toggle_rating(Rating::Loved);
    let ids: Vec<&str> = filter_places(&places, &narrowed, &EnUs)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["1"]);
    assert_eq!(narrowed.active_filter_count(), 1);

    let sushi = PlaceFilterState::new().toggle_cuisine("Sushi");
    let ids: Vec<&str> = filter_places(&places, &sushi, &EnUs)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn cities_keep_first_seen_order() {
    let collections = vec![
        common::collection("1", "Tokyo", Vec::new()),
        common::collection("2", "Osaka", Vec::new()),
        common::collection("3", "Tokyo", Vec::new()),
    ];

    let groups = group_by_city(&collections);

    let cities: Vec<&str> = groups.iter().map(|g| g.city.as_str()).collect();
    assert_eq!(cities, ["Tokyo", "Osaka"]);
    let tokyo: Vec<&str> = groups[0].items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(tokyo, ["1", "3"]);
}

#[test]
fn avatar_rows_collapse_the_overflow() {
    let six = common::collaborators(6);
    let stack = avatar_stack(&six, 4).unwrap();
    assert_eq!(stack.shown.len(), 4);
    assert_eq!(stack.overflow, 2);
    assert_eq!(stack.overflow_label().as_deref(), Some("+2"));

    let three = common::collaborators(3);
    let stack = avatar_stack(&three, 4).unwrap();
    assert_eq!(stack.shown.len(), 3);
    assert_eq!(stack.overflow, 0);
    assert_eq!(stack.overflow_label(), None);

    assert!(avatar_stack(&common::collaborators(0), 4).is_none());
}

#[test]
fn equal_timestamps_order_by_id_whatever_the_input_order() {
    let now = common::tokyo_now();
    let at = local(&now, 0, 12);
    let forward = vec![
        common::check_in("x", at, Rating::Loved),
        common::check_in("y", at, Rating::Neutral),
    ];
    let backward: Vec<CheckIn> = forward.iter().rev().cloned().collect();

    let first = group_by_day(&forward, &now, &EnUs);
    let second = group_by_day(&backward, &now, &EnUs);

    assert_eq!(first, second);
    let ids: Vec<&str> = first[0].check_ins.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["x", "y"]);
}

#[test]
fn filtering_and_city_grouping_are_repeatable() {
    let places = vec![
        common::place("1", "Tsuta Ramen", "Ramen", Rating::Loved),
        common::place("2", "Sushi Saito", "Sushi", Rating::Neutral),
        common::place("3", "Afuri", "Ramen", Rating::Disliked),
    ];
    let state = PlaceFilterState::new()
        .with_search_query("a")
        .toggle_cuisine("Ramen");

    let once = filter_places(&places, &state, &EnUs);
    let twice = filter_places(&places, &state, &EnUs);
    assert_eq!(once, twice);

    let kept: Vec<_> = once.into_iter().cloned().collect();
    assert_eq!(filter_places(&kept, &state, &EnUs).len(), kept.len());

    let collections = vec![
        common::collection("1", "Tokyo", Vec::new()),
        common::collection("2", "Osaka", Vec::new()),
        common::collection("3", "Tokyo", Vec::new()),
    ];
    assert_eq!(group_by_city(&collections), group_by_city(&collections));
}
