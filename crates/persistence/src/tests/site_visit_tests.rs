// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_store, new_site_visit, timestamp};
use crate::{ListFilter, NewSiteVisit, SiteVisitRecord, Store};

#[test]
fn test_insert_site_visit_round_trips_all_fields() {
    let mut store: Store = create_test_store();

    let new: NewSiteVisit = NewSiteVisit {
        organization: Some(String::from("민수 밴드")),
        purposes: vec![String::from("공연"), String::from("행사")],
        has_rental: true,
        ..new_site_visit("김민수", &timestamp(1))
    };

    let record: SiteVisitRecord = store.insert_site_visit(&new).expect("insert should succeed");

    assert!(record.id > 0);
    assert_eq!(record.name, "김민수");
    assert_eq!(record.organization.as_deref(), Some("민수 밴드"));
    assert_eq!(
        record.purposes,
        vec![String::from("공연"), String::from("행사")]
    );
    assert_eq!(record.purpose_detail, "정기 공연 장소 답사");
    assert!(record.has_rental);
    assert_eq!(record.status, "pending");
}

#[test]
fn test_site_visit_status_update_round_trip() {
    let mut store: Store = create_test_store();
    let record: SiteVisitRecord = store
        .insert_site_visit(&new_site_visit("김민수", &timestamp(1)))
        .expect("insert should succeed");

    let updated: Option<SiteVisitRecord> = store
        .update_site_visit_status(record.id, "completed")
        .expect("update should succeed");

    assert_eq!(updated.expect("record should exist").status, "completed");
    assert!(
        store
            .update_site_visit_status(999, "completed")
            .expect("update should succeed")
            .is_none()
    );
}

#[test]
fn test_site_visit_list_filters_by_status() {
    let mut store: Store = create_test_store();
    let first: SiteVisitRecord = store
        .insert_site_visit(&new_site_visit("김민수", &timestamp(1)))
        .expect("insert should succeed");
    store
        .insert_site_visit(&new_site_visit("박지훈", &timestamp(2)))
        .expect("insert should succeed");

    store
        .update_site_visit_status(first.id, "confirmed")
        .expect("update should succeed");

    let filter: ListFilter = ListFilter {
        status: Some(String::from("confirmed")),
        limit: 20,
        ..ListFilter::default()
    };
    let (records, total) = store.list_site_visits(&filter).expect("list should succeed");

    assert_eq!(total, 1);
    assert_eq!(records[0].id, first.id);
}

#[test]
fn test_site_visit_search_includes_rental_flag() {
    let mut store: Store = create_test_store();
    store
        .insert_site_visit(&NewSiteVisit {
            has_rental: true,
            ..new_site_visit("김민수", &timestamp(1))
        })
        .expect("insert should succeed");

    let summaries = store
        .search_site_visits("김민수", 10)
        .expect("search should succeed");

    assert_eq!(summaries.len(), 1);
    assert!(summaries[0].has_rental);
}

#[test]
fn test_site_visit_stats_projection() {
    let mut store: Store = create_test_store();
    let record: SiteVisitRecord = store
        .insert_site_visit(&new_site_visit("김민수", &timestamp(1)))
        .expect("insert should succeed");
    store
        .update_site_visit_status(record.id, "confirmed")
        .expect("update should succeed");

    let stats = store
        .site_visit_stats(None)
        .expect("stats fetch should succeed");

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].status, "confirmed");
}
