// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::shareable_link_response::ShareableLinkSchemaDto;
use crate::application::dto::webhook_event_request::LicenseKeyInput;
use crate::domain::errors::ResolverError;
use crate::domain::models::shareable_link::ShareableLink;
use crate::domain::models::user::User;
use crate::domain::services::schema_service::SchemaService;
use crate::domain::services::shareable_link_service::ShareableLinkService;
use crate::domain::services::team_service::TeamService;
use crate::infrastructure::metrics::record_resolver_call;
use crate::utils::validators::is_valid_link_key;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 分享链接解析器
///
/// 提供分享链接的生成、查找、更新，以及通过分享链接公开读取数据模式
pub struct ShareableLinkResolver {
    schema_service: Arc<SchemaService>,
    team_service: Arc<TeamService>,
    shareable_link_service: Arc<ShareableLinkService>,
}

impl ShareableLinkResolver {
    /// 创建新的分享链接解析器
    pub fn new(
        schema_service: Arc<SchemaService>,
        team_service: Arc<TeamService>,
        shareable_link_service: Arc<ShareableLinkService>,
    ) -> Self {
        Self {
            schema_service,
            team_service,
            shareable_link_service,
        }
    }

    /// 为数据模式获取或创建分享链接
    ///
    /// 数据模式已有分享链接时原样返回，否则按 `enable_sharing` 创建新链接
    ///
    /// # 返回值
    ///
    /// * `Ok(ShareableLink)` - 已有或新建的分享链接
    /// * `Err(ResolverError::UserInput)` - 数据模式不存在或调用方无权访问其团队
    /// * `Err(ResolverError::Failure)` - 创建分享链接失败
    pub async fn generate_shareable_link(
        &self,
        user: &User,
        schema_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, ResolverError> {
        let result = self.generate(user, schema_id, enable_sharing).await;
        record("generate_shareable_link", &result);
        result
    }

    /// 根据公开密钥查找分享链接
    pub async fn get_shareable_link_by_key(&self, key: &str) -> Result<ShareableLink, ResolverError> {
        let result = self.find_by_key(key).await;
        record("shareable_link_by_key", &result);
        result
    }

    /// 更新分享链接的分享开关
    ///
    /// 调用方必须能访问链接所属数据模式的团队
    pub async fn update_share_link(
        &self,
        user: &User,
        link_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, ResolverError> {
        let result = self.update(user, link_id, enable_sharing).await;
        record("update_share_link", &result);
        result
    }

    /// 通过分享链接公开读取数据模式
    ///
    /// 不需要调用方身份。链接必须存在且启用分享，并且提供的许可证密钥
    /// 必须属于数据模式所属团队持有的许可证之一。
    ///
    /// # 返回值
    ///
    /// * `Ok(ShareableLinkSchemaDto)` - 精简的数据模式
    /// * `Err(ResolverError::UserInput)` - 分享链接密钥或许可证密钥无效
    pub async fn get_shareable_link_schema(
        &self,
        input: &LicenseKeyInput,
        shareable_link_key: &str,
    ) -> Result<ShareableLinkSchemaDto, ResolverError> {
        let result = self.public_schema(input, shareable_link_key).await;
        record("shareable_link_schema", &result);
        result
    }

    async fn generate(
        &self,
        user: &User,
        schema_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, ResolverError> {
        let schema = self
            .schema_service
            .find_schema_by_id(schema_id)
            .await?
            .ok_or_else(|| {
                warn!("Schema {} not found for user {}", schema_id, user.id);
                ResolverError::user_input("Schema ID is invalid.", "schemaId")
            })?;

        self.team_service
            .find_team_for_user_or_fail(user, schema.team_id)
            .await?;

        if let Some(link) = self
            .shareable_link_service
            .find_shareable_link_by_schema(&schema)
            .await?
        {
            debug!("Reusing shareable link {} for schema {}", link.id, schema.id);
            return Ok(link);
        }

        self.shareable_link_service
            .create_shareable_link(&schema, enable_sharing)
            .await
            .map_err(|e| {
                error!("Failed to create shareable link for schema {}: {}", schema.id, e);
                ResolverError::Failure("Error while creating shareable link.".to_string())
            })
    }

    async fn find_by_key(&self, key: &str) -> Result<ShareableLink, ResolverError> {
        let invalid_key = || ResolverError::user_input("Shareable link Key is invalid.", "key");

        if !is_valid_link_key(key) {
            return Err(invalid_key());
        }

        self.shareable_link_service
            .find_shareable_link_by_key(key)
            .await?
            .ok_or_else(invalid_key)
    }

    async fn update(
        &self,
        user: &User,
        link_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, ResolverError> {
        let invalid_id = || ResolverError::user_input("Shareable link ID is invalid.", "linkId");

        let link = self
            .shareable_link_service
            .find_shareable_link_by_id(link_id)
            .await?
            .ok_or_else(invalid_id)?;

        // A link whose schema is gone is as good as missing
        let schema = self
            .shareable_link_service
            .schema_for_link(&link)
            .await?
            .ok_or_else(invalid_id)?;

        self.team_service
            .find_team_for_user_or_fail(user, schema.team_id)
            .await?;

        let updated = self
            .shareable_link_service
            .update_enable_sharing(&link, enable_sharing)
            .await?;
        Ok(updated)
    }

    async fn public_schema(
        &self,
        input: &LicenseKeyInput,
        shareable_link_key: &str,
    ) -> Result<ShareableLinkSchemaDto, ResolverError> {
        let invalid_link =
            || ResolverError::user_input("Shareable link key is invalid.", "shareableLinkKey");
        let invalid_license = || ResolverError::user_input("License key is invalid.", "licenseKey");

        if !is_valid_link_key(shareable_link_key) {
            return Err(invalid_link());
        }

        let link = self
            .shareable_link_service
            .find_shareable_link_by_key(shareable_link_key)
            .await?
            .filter(|link| link.enable_sharing)
            .ok_or_else(invalid_link)?;

        let schema = self
            .shareable_link_service
            .schema_for_link(&link)
            .await?
            .ok_or_else(invalid_link)?;

        let license_key = input.license_key.as_deref().ok_or_else(invalid_license)?;

        let team = self
            .shareable_link_service
            .team_for_schema(&schema)
            .await?
            .ok_or_else(invalid_license)?;

        let licenses = self.shareable_link_service.licenses_for_team(&team).await?;
        if !licenses.iter().any(|license| license.matches_key(license_key)) {
            warn!(
                "License key does not belong to team {} for shareable link {}",
                team.id, link.id
            );
            return Err(invalid_license());
        }

        Ok(ShareableLinkSchemaDto::from(schema))
    }
}

fn record<T>(resolver: &'static str, result: &Result<T, ResolverError>) {
    record_resolver_call(
        resolver,
        match result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        },
    );
}

#[cfg(test)]
#[path = "shareable_link_resolver_test.rs"]
mod tests;
