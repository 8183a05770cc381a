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

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::application::resolvers::shareable_link_resolver::ShareableLinkResolver;
use crate::application::resolvers::webhook_resolver::WebhookResolver;
use crate::config::settings::PaginationSettings;
use crate::domain::repositories::license_repository::LicenseRepository;
use crate::domain::repositories::schema_repository::SchemaRepository;
use crate::domain::repositories::shareable_link_repository::ShareableLinkRepository;
use crate::domain::repositories::team_repository::TeamRepository;
use crate::domain::repositories::webhook_event_repository::WebhookEventRepository;
use crate::domain::services::identity_service::IdentityService;
use crate::domain::services::pagination_service::PaginationService;
use crate::domain::services::schema_service::SchemaService;
use crate::domain::services::shareable_link_service::ShareableLinkService;
use crate::domain::services::team_service::TeamService;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL 字段使用的解析器集合，作为 schema 数据注入
#[derive(Clone)]
pub struct GraphQLResolvers {
    pub webhook: Arc<WebhookResolver>,
    pub shareable_link: Arc<ShareableLinkResolver>,
}

/// 解析器依赖的仓库集合
pub struct ResolverRepositories {
    pub team: Arc<dyn TeamRepository>,
    pub license: Arc<dyn LicenseRepository>,
    pub schema: Arc<dyn SchemaRepository>,
    pub shareable_link: Arc<dyn ShareableLinkRepository>,
    pub webhook_event: Arc<dyn WebhookEventRepository>,
}

impl GraphQLResolvers {
    /// 组装服务与解析器
    pub fn new(repos: ResolverRepositories, pagination: PaginationSettings) -> Self {
        let team_service = Arc::new(TeamService::new(repos.team.clone()));
        let identity_service = Arc::new(IdentityService::new(
            repos.license.clone(),
            repos.team.clone(),
        ));
        let schema_service = Arc::new(SchemaService::new(repos.schema.clone()));
        let shareable_link_service = Arc::new(ShareableLinkService::new(
            repos.shareable_link,
            repos.schema,
            repos.team,
            repos.license,
        ));

        Self {
            webhook: Arc::new(WebhookResolver::new(
                identity_service,
                team_service.clone(),
                PaginationService::new(pagination),
                repos.webhook_event,
            )),
            shareable_link: Arc::new(ShareableLinkResolver::new(
                schema_service,
                team_service,
                shareable_link_service,
            )),
        }
    }
}

/// 构建 GraphQL schema
pub fn build_schema(resolvers: GraphQLResolvers) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolvers)
        .finish()
}
