// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 单元测试用的内存仓库实现

use super::license_repository::LicenseRepository;
use super::schema_repository::SchemaRepository;
use super::shareable_link_repository::ShareableLinkRepository;
use super::team_repository::TeamRepository;
use super::user_repository::UserRepository;
use super::webhook_event_repository::{WebhookEventQuery, WebhookEventRepository};
use crate::domain::errors::RepositoryError;
use crate::domain::models::license::License;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::schema::Schema;
use crate::domain::models::shareable_link::{NewShareableLink, ShareableLink};
use crate::domain::models::team::Team;
use crate::domain::models::user::User;
use crate::domain::models::webhook::WebhookEvent;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// 同时实现所有仓库特质的内存存储
#[derive(Default)]
pub struct MockStore {
    pub users: Mutex<Vec<(User, String)>>,
    pub teams: Mutex<Vec<Team>>,
    pub members: Mutex<Vec<(i32, i32)>>,
    pub licenses: Mutex<Vec<License>>,
    pub schemas: Mutex<Vec<Schema>>,
    pub links: Mutex<Vec<ShareableLink>>,
    pub events: Mutex<Vec<WebhookEvent>>,
    pub fail_link_creation: AtomicBool,
    pub link_creations: AtomicUsize,
    pub event_queries: Mutex<Vec<(WebhookEventQuery, PageRequest)>>,
}

impl MockStore {
    pub fn user(id: i32) -> User {
        User {
            id,
            email: format!("user{}@example.com", id),
            name: format!("user {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn add_user(&self, id: i32, token: &str) -> User {
        let user = Self::user(id);
        self.users
            .lock()
            .unwrap()
            .push((user.clone(), token.to_string()));
        user
    }

    pub fn add_team(&self, id: i32, owner_id: i32) -> Team {
        let team = Team {
            id,
            name: format!("team {}", id),
            owner_id,
            created_at: Utc::now(),
        };
        self.teams.lock().unwrap().push(team.clone());
        team
    }

    pub fn add_member(&self, team_id: i32, user_id: i32) {
        self.members.lock().unwrap().push((team_id, user_id));
    }

    /// 添加许可证，`age_minutes` 越小越新
    pub fn add_license(
        &self,
        id: i32,
        key: &str,
        team_id: i32,
        user_id: Option<i32>,
        age_minutes: i64,
    ) -> License {
        let license = License {
            id,
            key: key.to_string(),
            team_id,
            user_id,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        };
        self.licenses.lock().unwrap().push(license.clone());
        license
    }

    pub fn add_schema(&self, id: i32, name: &str, team_id: i32) -> Schema {
        let schema = Schema {
            id,
            name: name.to_string(),
            team_id,
            created_at: Utc::now(),
        };
        self.schemas.lock().unwrap().push(schema.clone());
        schema
    }

    pub fn add_link(&self, id: i32, key: &str, schema_id: i32, enable_sharing: bool) -> ShareableLink {
        let link = ShareableLink {
            id,
            key: key.to_string(),
            schema_id,
            enable_sharing,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.links.lock().unwrap().push(link.clone());
        link
    }

    pub fn add_event(&self, id: i32, team_id: i32, event_type: &str, success: bool) -> WebhookEvent {
        let event = WebhookEvent {
            id,
            team_id,
            event_type: event_type.to_string(),
            url: "https://hooks.example.com/receive".to_string(),
            payload: serde_json::json!({ "id": id }),
            response_status: Some(if success { 200 } else { 500 }),
            success,
            created_at: Utc::now() - Duration::seconds(id as i64),
        };
        self.events.lock().unwrap().push(event.clone());
        event
    }
}

#[async_trait]
impl UserRepository for MockStore {
    async fn find_by_api_token(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(_, t)| t == token)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }
}

#[async_trait]
impl TeamRepository for MockStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, RepositoryError> {
        Ok(self.teams.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, RepositoryError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .contains(&(team_id, user_id)))
    }

    async fn find_accessible_team_ids(&self, user_id: i32) -> Result<Vec<i32>, RepositoryError> {
        let mut ids: Vec<i32> = self
            .teams
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id == user_id)
            .map(|t| t.id)
            .collect();
        ids.extend(
            self.members
                .lock()
                .unwrap()
                .iter()
                .filter(|(_, u)| *u == user_id)
                .map(|(t, _)| *t),
        );
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

#[async_trait]
impl LicenseRepository for MockStore {
    async fn find_by_key(&self, key: &str) -> Result<Option<License>, RepositoryError> {
        Ok(self
            .licenses
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.key == key)
            .cloned())
    }

    async fn find_latest_for_user(&self, user_id: i32) -> Result<Option<License>, RepositoryError> {
        Ok(self
            .licenses
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == Some(user_id))
            .max_by_key(|l| l.created_at)
            .cloned())
    }

    async fn find_latest_for_teams(
        &self,
        team_ids: &[i32],
    ) -> Result<Option<License>, RepositoryError> {
        Ok(self
            .licenses
            .lock()
            .unwrap()
            .iter()
            .filter(|l| team_ids.contains(&l.team_id))
            .max_by_key(|l| l.created_at)
            .cloned())
    }

    async fn find_by_team(&self, team_id: i32) -> Result<Vec<License>, RepositoryError> {
        Ok(self
            .licenses
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.team_id == team_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SchemaRepository for MockStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Schema>, RepositoryError> {
        Ok(self
            .schemas
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

#[async_trait]
impl ShareableLinkRepository for MockStore {
    async fn create(&self, link: &NewShareableLink) -> Result<ShareableLink, RepositoryError> {
        self.link_creations.fetch_add(1, Ordering::SeqCst);
        if self.fail_link_creation.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(DbErr::Custom(
                "insert failed".to_string(),
            )));
        }
        let mut links = self.links.lock().unwrap();
        let created = ShareableLink {
            id: links.len() as i32 + 1000,
            key: link.key.clone(),
            schema_id: link.schema_id,
            enable_sharing: link.enable_sharing,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        links.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ShareableLink>, RepositoryError> {
        Ok(self.links.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShareableLink>, RepositoryError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.key == key)
            .cloned())
    }

    async fn find_by_schema_id(
        &self,
        schema_id: i32,
    ) -> Result<Option<ShareableLink>, RepositoryError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.schema_id == schema_id)
            .cloned())
    }

    async fn update_enable_sharing(
        &self,
        id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, RepositoryError> {
        let mut links = self.links.lock().unwrap();
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(RepositoryError::NotFound)?;
        link.enable_sharing = enable_sharing;
        link.updated_at = Utc::now();
        Ok(link.clone())
    }
}

#[async_trait]
impl WebhookEventRepository for MockStore {
    async fn query(
        &self,
        query: &WebhookEventQuery,
        page: PageRequest,
    ) -> Result<(Vec<WebhookEvent>, u64), RepositoryError> {
        self.event_queries
            .lock()
            .unwrap()
            .push((query.clone(), page));

        let mut matching: Vec<WebhookEvent> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.team_id == query.team_id)
            .filter(|e| {
                query
                    .filter
                    .event_type
                    .as_ref()
                    .map_or(true, |t| &e.event_type == t)
            })
            .filter(|e| query.filter.success.map_or(true, |s| e.success == s))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect();
        Ok((data, total))
    }
}
