// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::schema::Schema;
use async_trait::async_trait;

/// 数据模式仓库特质
#[async_trait]
pub trait SchemaRepository: Send + Sync {
    /// 根据ID查找数据模式
    async fn find_by_id(&self, id: i32) -> Result<Option<Schema>, RepositoryError>;
}
