// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, first_error, MEMBER_TOKEN, OUTSIDER_TOKEN, OWNER_TOKEN, TEAM_EVENTS,
};
use serde_json::{json, Value};

const WEBHOOK_EVENTS: &str = r#"
query Events($license: LicenseKeyInput, $options: WebhookEventOptions) {
    webhookEvents(license: $license, options: $options) {
        pagination { totalCount onPage pageCount currentPage offset limit }
        data { id teamId eventType success payload createdAt }
    }
}"#;

const GENERATE_LINK: &str = r#"
mutation Generate($schemaId: Int!, $enableSharing: Boolean!) {
    generateShareableLink(schemaId: $schemaId, enableSharing: $enableSharing) {
        id key schemaId enableSharing
    }
}"#;

const UPDATE_LINK: &str = r#"
mutation Update($linkId: Int!, $enableSharing: Boolean!) {
    updateShareLink(linkId: $linkId, enableSharing: $enableSharing) {
        id key enableSharing
    }
}"#;

const LINK_BY_KEY: &str = r#"
query ByKey($key: String!) {
    shareableLinkByKey(key: $key) { id key schemaId }
}"#;

const LINK_SCHEMA: &str = r#"
query PublicSchema($license: LicenseKeyInput!, $key: String!) {
    shareableLinkSchema(license: $license, shareableLinkKey: $key) { id name }
}"#;

fn event_ids(body: &Value) -> Vec<i64> {
    body["data"]["webhookEvents"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_webhook_events_paginated_envelope() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({
                "license": { "licenseKey": app.seed.license_a },
                "options": { "pagination": { "page": 2, "limit": 5 } }
            }),
        )
        .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
    assert_eq!(
        body["data"]["webhookEvents"]["pagination"],
        json!({
            "totalCount": TEAM_EVENTS,
            "onPage": 5,
            "pageCount": 3,
            "currentPage": 2,
            "offset": 5,
            "limit": 5
        })
    );

    // event n was created n - 1 minutes ago, so ids ascend as age grows
    let ids = event_ids(&body);
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    for event in body["data"]["webhookEvents"]["data"].as_array().unwrap() {
        assert_eq!(event["teamId"], json!(app.seed.team_a));
    }
}

#[tokio::test]
async fn test_webhook_events_default_limit() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({ "license": { "licenseKey": app.seed.license_a } }),
        )
        .await;

    let pagination = &body["data"]["webhookEvents"]["pagination"];
    assert_eq!(pagination["limit"], json!(10));
    assert_eq!(pagination["onPage"], json!(10));
    assert_eq!(pagination["pageCount"], json!(2));
}

#[tokio::test]
async fn test_webhook_events_without_license_uses_accessible_team() {
    let app = create_test_app().await;

    for token in [OWNER_TOKEN, MEMBER_TOKEN] {
        let body = app.graphql(Some(token), WEBHOOK_EVENTS, json!({})).await;
        assert!(body["errors"].is_null(), "unexpected errors: {body}");
        assert_eq!(
            body["data"]["webhookEvents"]["pagination"]["totalCount"],
            json!(TEAM_EVENTS)
        );
    }
}

#[tokio::test]
async fn test_webhook_events_filter() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({
                "license": { "licenseKey": app.seed.license_a },
                "options": { "filter": { "eventType": "workbook.failed", "success": false } }
            }),
        )
        .await;

    let response = &body["data"]["webhookEvents"];
    assert_eq!(response["pagination"]["totalCount"], json!(TEAM_EVENTS / 2));
    for event in response["data"].as_array().unwrap() {
        assert_eq!(event["eventType"], json!("workbook.failed"));
        assert_eq!(event["success"], json!(false));
    }
}

#[tokio::test]
async fn test_webhook_events_rejects_malformed_license() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({ "license": { "licenseKey": "not-a-uuid" } }),
        )
        .await;

    assert!(body["data"].is_null());
    let (message, code, args) = first_error(&body);
    assert_eq!(message, "License key is invalid.");
    assert_eq!(code, "BAD_USER_INPUT");
    assert_eq!(args, vec!["licenseKey"]);
}

#[tokio::test]
async fn test_webhook_events_rejects_unknown_license() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({ "license": { "licenseKey": uuid::Uuid::new_v4().to_string() } }),
        )
        .await;

    let (message, _, args) = first_error(&body);
    assert_eq!(message, "License key is invalid.");
    assert_eq!(args, vec!["licenseKey"]);
}

#[tokio::test]
async fn test_webhook_events_rejects_foreign_team() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OUTSIDER_TOKEN),
            WEBHOOK_EVENTS,
            json!({ "license": { "licenseKey": app.seed.license_a } }),
        )
        .await;

    let (message, code, args) = first_error(&body);
    assert_eq!(message, "Team not found.");
    assert_eq!(code, "BAD_USER_INPUT");
    assert_eq!(args, vec!["teamId"]);
}

#[tokio::test]
async fn test_webhook_events_rejects_invalid_pagination() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            WEBHOOK_EVENTS,
            json!({
                "license": { "licenseKey": app.seed.license_a },
                "options": { "pagination": { "page": 0 } }
            }),
        )
        .await;

    let (message, _, args) = first_error(&body);
    assert_eq!(message, "Pagination options are invalid.");
    assert_eq!(args, vec!["options"]);
}

#[tokio::test]
async fn test_webhook_events_requires_caller() {
    let app = create_test_app().await;

    let body = app.graphql(None, WEBHOOK_EVENTS, json!({})).await;
    let (_, code, _) = first_error(&body);
    assert_eq!(code, "UNAUTHENTICATED");

    let body = app
        .graphql(Some("unknown-token"), WEBHOOK_EVENTS, json!({}))
        .await;
    let (_, code, _) = first_error(&body);
    assert_eq!(code, "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_generate_shareable_link_is_idempotent() {
    let app = create_test_app().await;
    let variables = json!({ "schemaId": app.seed.schema_a, "enableSharing": true });

    let first = app.graphql(Some(OWNER_TOKEN), GENERATE_LINK, variables.clone()).await;
    assert!(first["errors"].is_null(), "unexpected errors: {first}");
    let link = &first["data"]["generateShareableLink"];
    assert_eq!(link["schemaId"], json!(app.seed.schema_a));
    assert_eq!(link["enableSharing"], json!(true));

    // a member may read the same link; the flag argument does not overwrite it
    let second = app
        .graphql(
            Some(MEMBER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": app.seed.schema_a, "enableSharing": false }),
        )
        .await;
    assert_eq!(&second["data"]["generateShareableLink"], link);
}

#[tokio::test]
async fn test_generate_shareable_link_errors() {
    let app = create_test_app().await;

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": 9999, "enableSharing": true }),
        )
        .await;
    let (message, _, args) = first_error(&body);
    assert_eq!(message, "Schema ID is invalid.");
    assert_eq!(args, vec!["schemaId"]);

    let body = app
        .graphql(
            Some(OWNER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": app.seed.schema_b, "enableSharing": true }),
        )
        .await;
    let (message, _, args) = first_error(&body);
    assert_eq!(message, "Team not found.");
    assert_eq!(args, vec!["teamId"]);
}

#[tokio::test]
async fn test_update_share_link_and_lookup_by_key() {
    let app = create_test_app().await;

    let created = app
        .graphql(
            Some(OWNER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": app.seed.schema_a, "enableSharing": false }),
        )
        .await;
    let link = created["data"]["generateShareableLink"].clone();

    let updated = app
        .graphql(
            Some(OWNER_TOKEN),
            UPDATE_LINK,
            json!({ "linkId": link["id"], "enableSharing": true }),
        )
        .await;
    assert_eq!(updated["data"]["updateShareLink"]["enableSharing"], json!(true));
    assert_eq!(updated["data"]["updateShareLink"]["key"], link["key"]);

    let denied = app
        .graphql(
            Some(OUTSIDER_TOKEN),
            UPDATE_LINK,
            json!({ "linkId": link["id"], "enableSharing": false }),
        )
        .await;
    let (message, _, _) = first_error(&denied);
    assert_eq!(message, "Team not found.");

    let missing = app
        .graphql(
            Some(OWNER_TOKEN),
            UPDATE_LINK,
            json!({ "linkId": 4242, "enableSharing": false }),
        )
        .await;
    let (message, _, args) = first_error(&missing);
    assert_eq!(message, "Shareable link ID is invalid.");
    assert_eq!(args, vec!["linkId"]);

    let found = app
        .graphql(None, LINK_BY_KEY, json!({ "key": link["key"] }))
        .await;
    assert_eq!(found["data"]["shareableLinkByKey"]["id"], link["id"]);

    let malformed = app
        .graphql(None, LINK_BY_KEY, json!({ "key": "not a key!" }))
        .await;
    let (message, _, args) = first_error(&malformed);
    assert_eq!(message, "Shareable link Key is invalid.");
    assert_eq!(args, vec!["key"]);
}

#[tokio::test]
async fn test_shareable_link_schema_checks_team_license() {
    let app = create_test_app().await;

    let created = app
        .graphql(
            Some(OWNER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": app.seed.schema_a, "enableSharing": true }),
        )
        .await;
    let key = created["data"]["generateShareableLink"]["key"].clone();

    let body = app
        .graphql(
            None,
            LINK_SCHEMA,
            json!({ "license": { "licenseKey": app.seed.license_a }, "key": key }),
        )
        .await;
    assert_eq!(
        body["data"]["shareableLinkSchema"],
        json!({ "id": app.seed.schema_a.to_string(), "name": "loans" })
    );

    let body = app
        .graphql(
            None,
            LINK_SCHEMA,
            json!({ "license": { "licenseKey": app.seed.license_b }, "key": key }),
        )
        .await;
    let (message, code, args) = first_error(&body);
    assert_eq!(message, "License key is invalid.");
    assert_eq!(code, "BAD_USER_INPUT");
    assert_eq!(args, vec!["licenseKey"]);

    let body = app
        .graphql(
            None,
            LINK_SCHEMA,
            json!({ "license": { "licenseKey": app.seed.license_a }, "key": "missing-link" }),
        )
        .await;
    let (message, _, args) = first_error(&body);
    assert_eq!(message, "Shareable link key is invalid.");
    assert_eq!(args, vec!["shareableLinkKey"]);
}

#[tokio::test]
async fn test_shareable_link_schema_hidden_when_sharing_disabled() {
    let app = create_test_app().await;

    let created = app
        .graphql(
            Some(OWNER_TOKEN),
            GENERATE_LINK,
            json!({ "schemaId": app.seed.schema_a, "enableSharing": false }),
        )
        .await;
    let key = created["data"]["generateShareableLink"]["key"].clone();

    let body = app
        .graphql(
            None,
            LINK_SCHEMA,
            json!({ "license": { "licenseKey": app.seed.license_a }, "key": key }),
        )
        .await;
    let (message, _, _) = first_error(&body);
    assert_eq!(message, "Shareable link key is invalid.");
}
