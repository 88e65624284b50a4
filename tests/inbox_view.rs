use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use postbox::inbox::normalize::normalize;
use postbox::inbox::view::visible_items;
use postbox::inbox::{AggregateStore, Category, CategoryCounts, Filter, ViewState};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap()
}

fn load(mail: Value, letters: Value, packages: Value) -> AggregateStore {
    AggregateStore::load(
        normalize(Category::Mail, &mail, now()),
        normalize(Category::Letter, &letters, now()),
        normalize(Category::Package, &packages, now()),
    )
}

fn sample() -> AggregateStore {
    load(
        json!({ "mail": [
            { "id": "m1", "from": "bank@example.com", "subject": "Statement", "date": "2026-03-10T09:00:00Z", "unread": false },
            { "id": "m2", "sender": "Ada", "subject": "Lunch?", "body": "Pizza at noon", "created_at": "2026-03-12T09:00:00Z" }
        ] }),
        json!({ "data": [
            { "id": "l1", "sender": "Tax Office", "title": "Assessment", "received_at": "2026-03-12T09:00:00Z" }
        ] }),
        json!([
            { "id": "p1", "carrier": "DHL", "tracking_number": "T1", "status": "delivered", "date": "2026-03-11T09:00:00Z", "unread": false },
            { "id": "p2", "carrier": "UPS", "tracking_number": "T2", "status": "in transit" }
        ]),
    )
}

fn ids(store: &AggregateStore, view: &ViewState) -> Vec<String> {
    visible_items(store, view)
        .into_iter()
        .map(|item| item.id.clone())
        .collect()
}

#[test]
fn mail_and_package_scenario() {
    let store = load(
        json!([{ "subject": "Hi" }]),
        json!([]),
        json!([{ "tracking_number": "T1" }]),
    );

    let stats = store.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(
        stats.per_category,
        CategoryCounts {
            mail: 1,
            letters: 0,
            packages: 1,
        }
    );
    assert_eq!(store.category(Category::Mail)[0].subject, "Hi");
    assert_eq!(store.category(Category::Package)[0].subject, "T1");
}

#[test]
fn counts_are_consistent_with_the_union() {
    let store = sample();
    let stats = store.stats();

    assert_eq!(
        stats.total,
        stats.per_category.mail + stats.per_category.letters + stats.per_category.packages
    );
    assert_eq!(
        stats.unread,
        store.all().iter().filter(|item| item.unread).count()
    );
    assert_eq!(stats.unread, 3);
}

#[test]
fn union_keeps_source_order() {
    let store = sample();
    let order: Vec<_> = store.all().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(order, ["mail:m1", "mail:m2", "letter:l1", "package:p1", "package:p2"]);
}

#[test]
fn view_sorts_newest_first_and_breaks_ties_by_source_order() {
    let store = sample();
    // p2 has no date and lands at load time; m2 and l1 share a timestamp.
    assert_eq!(
        ids(&store, &ViewState::default()),
        ["package:p2", "mail:m2", "letter:l1", "package:p1", "mail:m1"]
    );
}

#[test]
fn unread_filter_is_the_unread_subset() {
    let store = sample();
    assert_eq!(
        ids(&store, &ViewState::new(Filter::Unread, "")),
        ["package:p2", "mail:m2", "letter:l1"]
    );
}

#[test]
fn search_narrows_every_filter() {
    let store = sample();

    for filter in [
        Filter::All,
        Filter::Mail,
        Filter::Letters,
        Filter::Packages,
        Filter::Unread,
    ] {
        let base = ids(&store, &ViewState::new(filter, ""));
        for needle in ["a", "PIZZA", "transit", "letter", "zzz"] {
            let narrowed = ids(&store, &ViewState::new(filter, needle));
            assert!(
                narrowed.iter().all(|id| base.contains(id)),
                "{filter:?} + {needle:?} widened the result"
            );
        }
    }
}

#[test]
fn search_matches_preview_and_category_label() {
    let store = sample();

    assert_eq!(ids(&store, &ViewState::new(Filter::All, "PIZZA")), ["mail:m2"]);
    assert_eq!(
        ids(&store, &ViewState::new(Filter::All, "package")),
        ["package:p2", "package:p1"]
    );
    assert_eq!(
        ids(&store, &ViewState::new(Filter::Packages, "transit")),
        ["package:p2"]
    );
}

#[test]
fn missing_fields_resolve_to_defaults() {
    let store = load(json!([{}]), json!([{}]), json!([{}]));
    let defaults: Vec<_> = store
        .all()
        .iter()
        .map(|item| (item.from.as_str(), item.subject.as_str(), item.preview.as_str()))
        .collect();

    assert_eq!(
        defaults,
        [
            ("Unknown", "No Subject", ""),
            ("Unknown", "Letter", ""),
            ("Unknown", "Package", ""),
        ]
    );
    assert!(store.all().iter().all(|item| item.unread));
    assert!(store.all().iter().all(|item| item.received_at == now()));
}
