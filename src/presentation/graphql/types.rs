// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::dto::shareable_link_response::ShareableLinkSchemaDto;
use crate::application::dto::webhook_event_request::{LicenseKeyInput, WebhookEventOptions};
use crate::domain::models::pagination::{Paginated, PaginationMeta, PaginationOptions};
use crate::domain::models::shareable_link::ShareableLink;
use crate::domain::models::webhook::{WebhookEvent, WebhookEventFilter};
use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// 输入类型
// ---------------------------------------------------------------------------

/// 许可证密钥输入
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "LicenseKeyInput")]
pub struct LicenseKeyInputObject {
    pub license_key: Option<String>,
}

impl From<LicenseKeyInputObject> for LicenseKeyInput {
    fn from(input: LicenseKeyInputObject) -> Self {
        LicenseKeyInput {
            license_key: input.license_key,
        }
    }
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "PaginationOptions")]
pub struct PaginationInput {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "WebhookEventFilter")]
pub struct WebhookEventFilterInput {
    pub event_type: Option<String>,
    pub success: Option<bool>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

/// Webhook 事件查询选项
#[derive(Debug, Clone, Default, InputObject)]
#[graphql(name = "WebhookEventOptions")]
pub struct WebhookEventOptionsInput {
    pub pagination: Option<PaginationInput>,
    pub filter: Option<WebhookEventFilterInput>,
}

impl From<WebhookEventOptionsInput> for WebhookEventOptions {
    fn from(input: WebhookEventOptionsInput) -> Self {
        let pagination = input.pagination.unwrap_or_default();
        let filter = input.filter.unwrap_or_default();
        Self {
            pagination: PaginationOptions {
                page: pagination.page,
                limit: pagination.limit,
            },
            filter: WebhookEventFilter {
                event_type: filter.event_type,
                success: filter.success,
                created_after: filter.created_after,
                created_before: filter.created_before,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// 输出类型
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PaginationMeta")]
pub struct PaginationMetaObject {
    pub total_count: u64,
    pub on_page: u64,
    pub page_count: u64,
    pub current_page: u64,
    pub offset: u64,
    pub limit: u64,
}

impl From<PaginationMeta> for PaginationMetaObject {
    fn from(meta: PaginationMeta) -> Self {
        Self {
            total_count: meta.total_count,
            on_page: meta.on_page,
            page_count: meta.page_count,
            current_page: meta.current_page,
            offset: meta.offset,
            limit: meta.limit,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "WebhookEvent")]
pub struct WebhookEventObject {
    pub id: i32,
    pub team_id: i32,
    pub event_type: String,
    pub url: String,
    pub payload: async_graphql::Json<serde_json::Value>,
    pub response_status: Option<i32>,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

impl From<WebhookEvent> for WebhookEventObject {
    fn from(event: WebhookEvent) -> Self {
        Self {
            id: event.id,
            team_id: event.team_id,
            event_type: event.event_type,
            url: event.url,
            payload: async_graphql::Json(event.payload),
            response_status: event.response_status,
            success: event.success,
            created_at: event.created_at,
        }
    }
}

/// Webhook 事件分页响应
#[derive(Debug, Clone, SimpleObject)]
pub struct WebhookEventResponse {
    pub pagination: PaginationMetaObject,
    pub data: Vec<WebhookEventObject>,
}

impl From<Paginated<WebhookEvent>> for WebhookEventResponse {
    fn from(page: Paginated<WebhookEvent>) -> Self {
        Self {
            pagination: page.pagination.into(),
            data: page.data.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "ShareableLink")]
pub struct ShareableLinkObject {
    pub id: i32,
    pub key: String,
    pub schema_id: i32,
    pub enable_sharing: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShareableLink> for ShareableLinkObject {
    fn from(link: ShareableLink) -> Self {
        Self {
            id: link.id,
            key: link.key,
            schema_id: link.schema_id,
            enable_sharing: link.enable_sharing,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// 通过分享链接公开的数据模式
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "ShareableLinkSchema")]
pub struct ShareableLinkSchemaObject {
    pub id: String,
    pub name: String,
}

impl From<ShareableLinkSchemaDto> for ShareableLinkSchemaObject {
    fn from(dto: ShareableLinkSchemaDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
