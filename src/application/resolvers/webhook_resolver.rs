// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::webhook_event_request::{LicenseKeyInput, WebhookEventOptions};
use crate::domain::errors::ResolverError;
use crate::domain::models::pagination::Paginated;
use crate::domain::models::user::User;
use crate::domain::models::webhook::WebhookEvent;
use crate::domain::repositories::webhook_event_repository::{
    WebhookEventQuery, WebhookEventRepository,
};
use crate::domain::services::identity_service::IdentityService;
use crate::domain::services::pagination_service::PaginationService;
use crate::domain::services::team_service::TeamService;
use crate::infrastructure::metrics::record_resolver_call;
use std::sync::Arc;
use tracing::{debug, warn};
use validator::Validate;

const RESOLVER: &str = "webhook_events";

/// Webhook事件解析器
pub struct WebhookResolver {
    identity_service: Arc<IdentityService>,
    team_service: Arc<TeamService>,
    pagination_service: PaginationService,
    webhook_event_repo: Arc<dyn WebhookEventRepository>,
}

impl WebhookResolver {
    /// 创建新的Webhook事件解析器
    pub fn new(
        identity_service: Arc<IdentityService>,
        team_service: Arc<TeamService>,
        pagination_service: PaginationService,
        webhook_event_repo: Arc<dyn WebhookEventRepository>,
    ) -> Self {
        Self {
            identity_service,
            team_service,
            pagination_service,
            webhook_event_repo,
        }
    }

    /// 查询调用方团队的Webhook事件
    ///
    /// # 参数
    ///
    /// * `user` - 调用方
    /// * `input` - 可选的许可证密钥
    /// * `options` - 分页与过滤选项
    ///
    /// # 返回值
    ///
    /// * `Ok(Paginated<WebhookEvent>)` - 分页服务产出的分页响应信封
    /// * `Err(ResolverError::UserInput)` - 许可证密钥无效、团队不可访问或分页参数非法
    pub async fn get_webhook_events(
        &self,
        user: &User,
        input: &LicenseKeyInput,
        options: &WebhookEventOptions,
    ) -> Result<Paginated<WebhookEvent>, ResolverError> {
        let result = self.resolve(user, input, options).await;
        record_resolver_call(
            RESOLVER,
            match &result {
                Ok(_) => "ok",
                Err(e) => e.kind(),
            },
        );
        result
    }

    async fn resolve(
        &self,
        user: &User,
        input: &LicenseKeyInput,
        options: &WebhookEventOptions,
    ) -> Result<Paginated<WebhookEvent>, ResolverError> {
        let license_key = input.license_key.as_deref();
        if let Some(key) = license_key {
            if !self.identity_service.is_uuid(key) {
                warn!("Rejected malformed license key from user {}", user.id);
                return Err(invalid_license_key());
            }
        }

        let license = self
            .identity_service
            .get_best_license_key(user, license_key)
            .await?
            .ok_or_else(|| {
                warn!("No license resolved for user {}", user.id);
                invalid_license_key()
            })?;

        let team = self
            .team_service
            .find_team_for_user_or_fail(user, license.team_id)
            .await?;

        if options.pagination.validate().is_err() {
            return Err(ResolverError::user_input(
                "Pagination options are invalid.",
                "options",
            ));
        }

        let query = WebhookEventQuery {
            team_id: team.id,
            filter: options.filter.clone(),
        };
        debug!("Querying webhook events for team {}", team.id);

        let repo = self.webhook_event_repo.clone();
        let page = self
            .pagination_service
            .paginate(&options.pagination, |request| async move {
                repo.query(&query, request).await
            })
            .await?;

        Ok(page)
    }
}

fn invalid_license_key() -> ResolverError {
    ResolverError::user_input("License key is invalid.", "licenseKey")
}

#[cfg(test)]
#[path = "webhook_resolver_test.rs"]
mod tests;
