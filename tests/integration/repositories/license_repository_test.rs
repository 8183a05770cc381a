// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{insert_license, seed, setup_db};
use chrono::Duration;
use sharegraph::domain::repositories::license_repository::LicenseRepository;
use sharegraph::infrastructure::repositories::license_repo_impl::LicenseRepoImpl;

#[tokio::test]
async fn test_find_by_key_and_team() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = LicenseRepoImpl::new(db.clone());

    let license = repo.find_by_key(&seed.license_a).await.unwrap().unwrap();
    assert_eq!(license.team_id, seed.team_a);
    assert_eq!(license.user_id, Some(seed.owner_id));

    let team_licenses = repo.find_by_team(seed.team_b).await.unwrap();
    assert_eq!(team_licenses.len(), 1);
    assert!(team_licenses[0].matches_key(&seed.license_b));
}

#[tokio::test]
async fn test_latest_license_wins() {
    let db = setup_db().await;
    let seed = seed(db.as_ref()).await;
    let repo = LicenseRepoImpl::new(db.clone());

    let newer = insert_license(db.as_ref(), seed.team_a, None, Duration::hours(1)).await;

    // the unassigned license does not count for the owner personally
    let personal = repo.find_latest_for_user(seed.owner_id).await.unwrap().unwrap();
    assert_eq!(personal.key, seed.license_a);

    let team = repo
        .find_latest_for_teams(&[seed.team_a])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(team.key, newer);

    assert!(repo.find_latest_for_teams(&[]).await.unwrap().is_none());
    assert!(repo.find_latest_for_user(seed.member_id).await.unwrap().is_none());
}
