// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::license::License;
use crate::domain::models::schema::Schema;
use crate::domain::models::shareable_link::{NewShareableLink, ShareableLink};
use crate::domain::models::team::Team;
use crate::domain::repositories::license_repository::LicenseRepository;
use crate::domain::repositories::schema_repository::SchemaRepository;
use crate::domain::repositories::shareable_link_repository::ShareableLinkRepository;
use crate::domain::repositories::team_repository::TeamRepository;
use std::sync::Arc;
use tracing::debug;

/// 分享链接服务
///
/// 封装分享链接的查找、创建和更新，并提供从链接到数据模式、团队、
/// 许可证的逐级关联查找
pub struct ShareableLinkService {
    link_repo: Arc<dyn ShareableLinkRepository>,
    schema_repo: Arc<dyn SchemaRepository>,
    team_repo: Arc<dyn TeamRepository>,
    license_repo: Arc<dyn LicenseRepository>,
}

impl ShareableLinkService {
    /// 创建新的分享链接服务实例
    pub fn new(
        link_repo: Arc<dyn ShareableLinkRepository>,
        schema_repo: Arc<dyn SchemaRepository>,
        team_repo: Arc<dyn TeamRepository>,
        license_repo: Arc<dyn LicenseRepository>,
    ) -> Self {
        Self {
            link_repo,
            schema_repo,
            team_repo,
            license_repo,
        }
    }

    /// 查找数据模式对应的分享链接
    pub async fn find_shareable_link_by_schema(
        &self,
        schema: &Schema,
    ) -> Result<Option<ShareableLink>, RepositoryError> {
        self.link_repo.find_by_schema_id(schema.id).await
    }

    /// 为数据模式创建分享链接，公开密钥随机生成
    pub async fn create_shareable_link(
        &self,
        schema: &Schema,
        enable_sharing: bool,
    ) -> Result<ShareableLink, RepositoryError> {
        let link = NewShareableLink::for_schema(schema.id, enable_sharing);
        debug!("Creating shareable link for schema {}", schema.id);
        self.link_repo.create(&link).await
    }

    /// 根据公开密钥查找分享链接
    pub async fn find_shareable_link_by_key(
        &self,
        key: &str,
    ) -> Result<Option<ShareableLink>, RepositoryError> {
        self.link_repo.find_by_key(key).await
    }

    /// 根据ID查找分享链接
    pub async fn find_shareable_link_by_id(
        &self,
        id: i32,
    ) -> Result<Option<ShareableLink>, RepositoryError> {
        self.link_repo.find_by_id(id).await
    }

    /// 更新分享开关并返回更新后的链接
    pub async fn update_enable_sharing(
        &self,
        link: &ShareableLink,
        enable_sharing: bool,
    ) -> Result<ShareableLink, RepositoryError> {
        debug!(
            "Setting enable_sharing={} on shareable link {}",
            enable_sharing, link.id
        );
        self.link_repo
            .update_enable_sharing(link.id, enable_sharing)
            .await
    }

    /// 查找链接关联的数据模式
    pub async fn schema_for_link(
        &self,
        link: &ShareableLink,
    ) -> Result<Option<Schema>, RepositoryError> {
        self.schema_repo.find_by_id(link.schema_id).await
    }

    /// 查找数据模式所属的团队
    pub async fn team_for_schema(&self, schema: &Schema) -> Result<Option<Team>, RepositoryError> {
        self.team_repo.find_by_id(schema.team_id).await
    }

    /// 查找团队持有的全部许可证
    pub async fn licenses_for_team(&self, team: &Team) -> Result<Vec<License>, RepositoryError> {
        self.license_repo.find_by_team(team.id).await
    }
}
