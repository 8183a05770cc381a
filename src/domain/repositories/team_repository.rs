// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::team::Team;
use async_trait::async_trait;

/// 团队仓库特质
///
/// 定义团队及团队成员关系的数据访问接口
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// 根据ID查找团队
    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, RepositoryError>;
    /// 检查用户是否为团队成员（不含所有者身份）
    async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, RepositoryError>;
    /// 查找用户拥有或加入的所有团队ID
    async fn find_accessible_team_ids(&self, user_id: i32) -> Result<Vec<i32>, RepositoryError>;
}
