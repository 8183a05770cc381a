// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{insert_event, seed, setup_db, TEAM_EVENTS};
use chrono::{Duration, Utc};
use sharegraph::domain::models::pagination::PageRequest;
use sharegraph::domain::models::webhook::WebhookEventFilter;
use sharegraph::domain::repositories::webhook_event_repository::{
    WebhookEventQuery, WebhookEventRepository,
};
use sharegraph::infrastructure::repositories::webhook_event_repo_impl::WebhookEventRepoImpl;

#[tokio::test]
async fn test_query_is_scoped_to_team_and_ordered() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = WebhookEventRepoImpl::new(db.clone());

    let query = WebhookEventQuery {
        team_id: seed.team_b,
        filter: WebhookEventFilter::default(),
    };
    let (events, total) = repo.query(&query, PageRequest::new(1, 10)).await.unwrap();

    assert_eq!(total, 2);
    assert!(events.iter().all(|e| e.team_id == seed.team_b));
    assert!(events[0].created_at > events[1].created_at);
}

#[tokio::test]
async fn test_query_applies_offset_and_counts_all_rows() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = WebhookEventRepoImpl::new(db.clone());

    let query = WebhookEventQuery {
        team_id: seed.team_a,
        filter: WebhookEventFilter::default(),
    };
    let (events, total) = repo.query(&query, PageRequest::new(4, 4)).await.unwrap();

    assert_eq!(total, TEAM_EVENTS as u64);
    // 15 rows, the fourth page of four holds the last three
    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn test_query_filters_by_time_window() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = WebhookEventRepoImpl::new(db.clone());

    let now = Utc::now();
    let query = WebhookEventQuery {
        team_id: seed.team_a,
        filter: WebhookEventFilter {
            created_after: Some(now - Duration::seconds(270)),
            created_before: Some(now - Duration::seconds(90)),
            ..Default::default()
        },
    };
    let (events, total) = repo.query(&query, PageRequest::new(1, 10)).await.unwrap();

    // events aged 2, 3 and 4 minutes
    assert_eq!(total, 3);
    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn test_event_type_filter_matches_new_events() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = WebhookEventRepoImpl::new(db.clone());

    let id = insert_event(db.as_ref(), seed.team_b, "schema.shared", false, Duration::zero()).await;

    let query = WebhookEventQuery {
        team_id: seed.team_b,
        filter: WebhookEventFilter {
            event_type: Some("schema.shared".to_string()),
            ..Default::default()
        },
    };
    let (events, total) = repo.query(&query, PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(events[0].id, id);
    assert!(!events[0].success);
}
