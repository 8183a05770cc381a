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

use crate::domain::errors::RepositoryError;
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::webhook::{WebhookEvent, WebhookEventFilter};
use crate::domain::repositories::webhook_event_repository::{
    WebhookEventQuery, WebhookEventRepository,
};
use crate::infrastructure::database::entities::webhook_event;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// Webhook事件仓库实现
#[derive(Clone)]
pub struct WebhookEventRepoImpl {
    db: Arc<DatabaseConnection>,
}

impl WebhookEventRepoImpl {
    /// 创建新的Webhook事件仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// 将团队范围和过滤条件组合为查询条件
fn build_condition(team_id: i32, filter: &WebhookEventFilter) -> Condition {
    let mut condition = Condition::all().add(webhook_event::Column::TeamId.eq(team_id));

    if let Some(event_type) = &filter.event_type {
        condition = condition.add(webhook_event::Column::EventType.eq(event_type.as_str()));
    }
    if let Some(success) = filter.success {
        condition = condition.add(webhook_event::Column::Success.eq(success));
    }
    if let Some(after) = filter.created_after {
        condition = condition.add(webhook_event::Column::CreatedAt.gte(after.fixed_offset()));
    }
    if let Some(before) = filter.created_before {
        condition = condition.add(webhook_event::Column::CreatedAt.lte(before.fixed_offset()));
    }

    condition
}

#[async_trait]
impl WebhookEventRepository for WebhookEventRepoImpl {
    async fn query(
        &self,
        query: &WebhookEventQuery,
        page: PageRequest,
    ) -> Result<(Vec<WebhookEvent>, u64), RepositoryError> {
        let condition = build_condition(query.team_id, &query.filter);

        let total = webhook_event::Entity::find()
            .filter(condition.clone())
            .count(self.db.as_ref())
            .await?;

        let models = webhook_event::Entity::find()
            .filter(condition)
            .order_by_desc(webhook_event::Column::CreatedAt)
            .order_by_desc(webhook_event::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db.as_ref())
            .await?;

        let events = models.into_iter().map(Into::into).collect();
        Ok((events, total))
    }
}

impl From<webhook_event::Model> for WebhookEvent {
    fn from(model: webhook_event::Model) -> Self {
        Self {
            id: model.id,
            team_id: model.team_id,
            event_type: model.event_type,
            url: model.url,
            payload: model.payload,
            response_status: model.response_status,
            success: model.success,
            created_at: model.created_at.into(),
        }
    }
}
