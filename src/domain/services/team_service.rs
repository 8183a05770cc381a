// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::ResolverError;
use crate::domain::models::team::Team;
use crate::domain::models::user::User;
use crate::domain::repositories::team_repository::TeamRepository;
use std::sync::Arc;

/// 团队服务
///
/// 处理团队访问权限的校验
pub struct TeamService {
    team_repo: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// 创建新的团队服务实例
    pub fn new(team_repo: Arc<dyn TeamRepository>) -> Self {
        Self { team_repo }
    }

    /// 查找调用方可访问的团队，找不到或无权访问时返回错误
    ///
    /// 调用方是团队所有者或团队成员时视为可访问。不存在的团队与
    /// 无权访问的团队返回相同的错误。
    ///
    /// # 参数
    ///
    /// * `user` - 调用方
    /// * `team_id` - 团队 ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Team)` - 调用方可访问的团队
    /// * `Err(ResolverError::UserInput)` - 团队不存在或调用方无权访问
    /// * `Err(ResolverError::Repository)` - 数据访问出错
    pub async fn find_team_for_user_or_fail(
        &self,
        user: &User,
        team_id: i32,
    ) -> Result<Team, ResolverError> {
        let team = match self.team_repo.find_by_id(team_id).await? {
            Some(team) => team,
            None => {
                tracing::warn!("Team {} not found for user {}", team_id, user.id);
                return Err(team_not_found());
            }
        };

        if team.is_owned_by(user.id) || self.team_repo.is_member(team.id, user.id).await? {
            tracing::debug!("User {} has access to team {}", user.id, team.id);
            return Ok(team);
        }

        tracing::warn!("User {} has no access to team {}", user.id, team.id);
        Err(team_not_found())
    }
}

fn team_not_found() -> ResolverError {
    ResolverError::user_input("Team not found.", "teamId")
}

#[cfg(test)]
#[path = "team_service_test.rs"]
mod tests;
