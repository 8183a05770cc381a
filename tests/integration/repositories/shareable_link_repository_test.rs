// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed, setup_db};
use sharegraph::domain::errors::RepositoryError;
use sharegraph::domain::models::shareable_link::NewShareableLink;
use sharegraph::domain::repositories::schema_repository::SchemaRepository;
use sharegraph::domain::repositories::shareable_link_repository::ShareableLinkRepository;
use sharegraph::infrastructure::repositories::schema_repo_impl::SchemaRepoImpl;
use sharegraph::infrastructure::repositories::shareable_link_repo_impl::ShareableLinkRepoImpl;

#[tokio::test]
async fn test_create_find_and_update() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = ShareableLinkRepoImpl::new(db.clone());

    let created = repo
        .create(&NewShareableLink::for_schema(seed.schema_a, false))
        .await
        .unwrap();
    assert!(!created.enable_sharing);

    let by_key = repo.find_by_key(&created.key).await.unwrap().unwrap();
    assert_eq!(by_key.id, created.id);
    let by_schema = repo.find_by_schema_id(seed.schema_a).await.unwrap().unwrap();
    assert_eq!(by_schema.id, created.id);
    assert!(repo.find_by_schema_id(seed.schema_b).await.unwrap().is_none());

    let updated = repo.update_enable_sharing(created.id, true).await.unwrap();
    assert!(updated.enable_sharing);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.key, created.key);
}

#[tokio::test]
async fn test_update_missing_link_is_not_found() {
    let db = setup_db().await;
    let repo = ShareableLinkRepoImpl::new(db.clone());

    let result = repo.update_enable_sharing(4242, true).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_one_link_per_schema() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = ShareableLinkRepoImpl::new(db.clone());

    repo.create(&NewShareableLink::for_schema(seed.schema_a, true))
        .await
        .unwrap();
    let duplicate = repo
        .create(&NewShareableLink::for_schema(seed.schema_a, true))
        .await;
    assert!(matches!(duplicate, Err(RepositoryError::Database(_))));
}

#[tokio::test]
async fn test_schema_lookup() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = SchemaRepoImpl::new(db.clone());

    let schema = repo.find_by_id(seed.schema_a).await.unwrap().unwrap();
    assert_eq!(schema.name, "loans");
    assert_eq!(schema.team_id, seed.team_a);
    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}
