// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::RepositoryError;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::webhook::{WebhookEvent, WebhookEventFilter};
use async_trait::async_trait;

/// Webhook事件查询参数
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEventQuery {
    /// 团队ID（必填，查询范围限定在该团队内）
    pub team_id: i32,
    /// 过滤条件
    pub filter: WebhookEventFilter,
}

/// Webhook事件仓库特质
///
/// 定义Webhook事件数据访问接口
#[async_trait]
pub trait WebhookEventRepository: Send + Sync {
    /// 分页查询，返回当前页记录和符合条件的总数
    async fn query(
        &self,
        query: &WebhookEventQuery,
        page: PageRequest,
    ) -> Result<(Vec<WebhookEvent>, u64), RepositoryError>;
}
