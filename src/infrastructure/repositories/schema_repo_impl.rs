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
use crate::domain::models::schema::Schema;
use crate::domain::repositories::schema_repository::SchemaRepository;
use crate::infrastructure::database::entities::schema;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct SchemaRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl SchemaRepoImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaRepository for SchemaRepoImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<Schema>, RepositoryError> {
        let model = schema::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }
}

impl From<schema::Model> for Schema {
    fn from(model: schema::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            team_id: model.team_id,
            created_at: model.created_at.into(),
        }
    }
}
