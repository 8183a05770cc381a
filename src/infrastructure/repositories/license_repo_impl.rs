// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::errors::RepositoryError;
use crate::domain::models::license::License;
use crate::domain::repositories::license_repository::LicenseRepository;
use crate::infrastructure::database::entities::license;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 许可证仓库实现
#[derive(Clone)]
pub struct LicenseRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl LicenseRepoImpl {
    /// 创建新的许可证仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LicenseRepository for LicenseRepoImpl {
    async fn find_by_key(&self, key: &str) -> Result<Option<License>, RepositoryError> {
        let model = license::Entity::find()
            .filter(license::Column::Key.eq(key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_latest_for_user(&self, user_id: i32) -> Result<Option<License>, RepositoryError> {
        let model = license::Entity::find()
            .filter(license::Column::UserId.eq(user_id))
            .order_by_desc(license::Column::CreatedAt)
            .order_by_desc(license::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_latest_for_teams(
        &self,
        team_ids: &[i32],
    ) -> Result<Option<License>, RepositoryError> {
        if team_ids.is_empty() {
            return Ok(None);
        }

        let model = license::Entity::find()
            .filter(license::Column::TeamId.is_in(team_ids.iter().copied()))
            .order_by_desc(license::Column::CreatedAt)
            .order_by_desc(license::Column::Id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_team(&self, team_id: i32) -> Result<Vec<License>, RepositoryError> {
        let models = license::Entity::find()
            .filter(license::Column::TeamId.eq(team_id))
            .order_by_asc(license::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

impl From<license::Model> for License {
    fn from(model: license::Model) -> Self {
        Self {
            id: model.id,
            key: model.key,
            team_id: model.team_id,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}
