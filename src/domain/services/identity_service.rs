// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::license::License;
use crate::domain::models::user::User;
use crate::domain::repositories::license_repository::LicenseRepository;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::utils::validators;
use std::sync::Arc;
use tracing::debug;

/// 身份服务
///
/// 负责标识符格式校验，以及为调用方挑选最合适的许可证
pub struct IdentityService {
    license_repo: Arc<dyn LicenseRepository>,
    team_repo: Arc<dyn TeamRepository>,
}

impl IdentityService {
    /// 创建新的身份服务实例
    pub fn new(
        license_repo: Arc<dyn LicenseRepository>,
        team_repo: Arc<dyn TeamRepository>,
    ) -> Self {
        Self {
            license_repo,
            team_repo,
        }
    }

    /// 检查标识符是否为合法的 UUID
    pub fn is_uuid(&self, value: &str) -> bool {
        validators::is_uuid(value)
    }

    /// 为调用方挑选最合适的许可证
    ///
    /// # 参数
    ///
    /// * `user` - 调用方
    /// * `license_key` - 调用方显式提供的许可证密钥
    ///
    /// # 返回值
    ///
    /// * 提供了密钥时，按标准 UUID 形式查找该密钥对应的许可证
    /// * 未提供密钥时，优先返回签发给调用方的最新许可证，
    ///   其次返回调用方可访问团队中最新的许可证
    /// * 找不到时返回 `Ok(None)`
    pub async fn get_best_license_key(
        &self,
        user: &User,
        license_key: Option<&str>,
    ) -> Result<Option<License>, RepositoryError> {
        if let Some(key) = license_key {
            debug!("Looking up license by key for user {}", user.id);
            let key = validators::normalize_uuid(key).unwrap_or_else(|| key.trim().to_string());
            return self.license_repo.find_by_key(&key).await;
        }

        if let Some(license) = self.license_repo.find_latest_for_user(user.id).await? {
            debug!("Using license {} issued to user {}", license.id, user.id);
            return Ok(Some(license));
        }

        let team_ids = self.team_repo.find_accessible_team_ids(user.id).await?;
        if team_ids.is_empty() {
            debug!("User {} has no accessible teams", user.id);
            return Ok(None);
        }

        self.license_repo.find_latest_for_teams(&team_ids).await
    }
}

#[cfg(test)]
#[path = "identity_service_test.rs"]
mod tests;
