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
use crate::domain::models::shareable_link::{NewShareableLink, ShareableLink};
use crate::domain::repositories::shareable_link_repository::ShareableLinkRepository;
use crate::infrastructure::database::entities::shareable_link;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 分享链接仓库实现
#[derive(Clone)]
pub struct ShareableLinkRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl ShareableLinkRepoImpl {
    /// 创建新的分享链接仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShareableLinkRepository for ShareableLinkRepoImpl {
    async fn create(&self, link: &NewShareableLink) -> Result<ShareableLink, RepositoryError> {
        let now = Utc::now();
        let active_model = shareable_link::ActiveModel {
            key: Set(link.key.clone()),
            schema_id: Set(link.schema_id),
            enable_sharing: Set(link.enable_sharing),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ShareableLink>, RepositoryError> {
        let model = shareable_link::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShareableLink>, RepositoryError> {
        let model = shareable_link::Entity::find()
            .filter(shareable_link::Column::Key.eq(key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_by_schema_id(
        &self,
        schema_id: i32,
    ) -> Result<Option<ShareableLink>, RepositoryError> {
        let model = shareable_link::Entity::find()
            .filter(shareable_link::Column::SchemaId.eq(schema_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update_enable_sharing(
        &self,
        id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, RepositoryError> {
        let mut active: shareable_link::ActiveModel = shareable_link::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        active.enable_sharing = Set(enable_sharing);
        active.updated_at = Set(Utc::now().into());

        let updated_model = active.update(self.db.as_ref()).await?;
        Ok(updated_model.into())
    }
}

impl From<shareable_link::Model> for ShareableLink {
    fn from(model: shareable_link::Model) -> Self {
        Self {
            id: model.id,
            key: model.key,
            schema_id: model.schema_id,
            enable_sharing: model.enable_sharing,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
