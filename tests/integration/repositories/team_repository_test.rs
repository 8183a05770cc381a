// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed, setup_db, OWNER_TOKEN};
use sharegraph::domain::repositories::team_repository::TeamRepository;
use sharegraph::domain::repositories::user_repository::UserRepository;
use sharegraph::infrastructure::repositories::team_repo_impl::TeamRepoImpl;
use sharegraph::infrastructure::repositories::user_repo_impl::UserRepoImpl;

#[tokio::test]
async fn test_membership_and_accessible_teams() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = TeamRepoImpl::new(db.clone());

    assert!(repo.is_member(seed.team_a, seed.member_id).await.unwrap());
    assert!(!repo.is_member(seed.team_a, seed.owner_id).await.unwrap());
    assert!(!repo.is_member(seed.team_a, seed.outsider_id).await.unwrap());

    assert_eq!(
        repo.find_accessible_team_ids(seed.owner_id).await.unwrap(),
        vec![seed.team_a]
    );
    assert_eq!(
        repo.find_accessible_team_ids(seed.member_id).await.unwrap(),
        vec![seed.team_a]
    );

    let team = repo.find_by_id(seed.team_b).await.unwrap().unwrap();
    assert!(team.is_owned_by(seed.outsider_id));
    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_user_lookup_by_token() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = UserRepoImpl::new(db.clone());

    let user = repo.find_by_api_token(OWNER_TOKEN).await.unwrap().unwrap();
    assert_eq!(user.id, seed.owner_id);
    assert_eq!(user.email, "owner@example.com");

    assert!(repo.find_by_api_token("nope").await.unwrap().is_none());
    assert!(repo.find_by_id(seed.member_id).await.unwrap().is_some());
}
