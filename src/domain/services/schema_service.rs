// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::schema::Schema;
use crate::domain::repositories::schema_repository::SchemaRepository;
use std::sync::Arc;

/// 数据模式服务
pub struct SchemaService {
    schema_repo: Arc<dyn SchemaRepository>,
}

impl SchemaService {
    pub fn new(schema_repo: Arc<dyn SchemaRepository>) -> Self {
        Self { schema_repo }
    }

    /// 根据ID查找数据模式
    pub async fn find_schema_by_id(&self, id: i32) -> Result<Option<Schema>, RepositoryError> {
        self.schema_repo.find_by_id(id).await
    }
}
