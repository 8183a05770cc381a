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
use crate::domain::models::team::Team;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::infrastructure::database::entities::{team, team_member};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 团队仓库实现
#[derive(Clone)]
pub struct TeamRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl TeamRepoImpl {
    /// 创建新的团队仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for TeamRepoImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, RepositoryError> {
        let model = team::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, RepositoryError> {
        let membership = team_member::Entity::find_by_id((team_id, user_id))
            .one(self.db.as_ref())
            .await?;

        Ok(membership.is_some())
    }

    async fn find_accessible_team_ids(&self, user_id: i32) -> Result<Vec<i32>, RepositoryError> {
        let mut ids: Vec<i32> = team::Entity::find()
            .select_only()
            .column(team::Column::Id)
            .filter(team::Column::OwnerId.eq(user_id))
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        let member_of: Vec<i32> = team_member::Entity::find()
            .select_only()
            .column(team_member::Column::TeamId)
            .filter(team_member::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        ids.extend(member_of);
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

impl From<team::Model> for Team {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
        }
    }
}
