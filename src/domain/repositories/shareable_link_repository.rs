// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::shareable_link::{NewShareableLink, ShareableLink};
use async_trait::async_trait;

/// 分享链接仓库特质
///
/// 定义分享链接数据访问接口
#[async_trait]
pub trait ShareableLinkRepository: Send + Sync {
    /// 创建分享链接
    async fn create(&self, link: &NewShareableLink) -> Result<ShareableLink, RepositoryError>;
    /// 根据ID查找分享链接
    async fn find_by_id(&self, id: i32) -> Result<Option<ShareableLink>, RepositoryError>;
    /// 根据公开密钥查找分享链接
    async fn find_by_key(&self, key: &str) -> Result<Option<ShareableLink>, RepositoryError>;
    /// 查找数据模式对应的分享链接
    async fn find_by_schema_id(
        &self,
        schema_id: i32,
    ) -> Result<Option<ShareableLink>, RepositoryError>;
    /// 更新分享开关，链接不存在时返回 `RepositoryError::NotFound`
    async fn update_enable_sharing(
        &self,
        id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLink, RepositoryError>;
}
