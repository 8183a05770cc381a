// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::license::License;
use async_trait::async_trait;

/// 许可证仓库特质
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// 根据密钥查找许可证
    async fn find_by_key(&self, key: &str) -> Result<Option<License>, RepositoryError>;
    /// 查找签发给用户的最新许可证
    async fn find_latest_for_user(&self, user_id: i32) -> Result<Option<License>, RepositoryError>;
    /// 在给定团队中查找最新的许可证
    async fn find_latest_for_teams(
        &self,
        team_ids: &[i32],
    ) -> Result<Option<License>, RepositoryError>;
    /// 查找团队持有的全部许可证
    async fn find_by_team(&self, team_id: i32) -> Result<Vec<License>, RepositoryError>;
}
