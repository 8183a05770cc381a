// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PaginationSettings;
use crate::infrastructure::repositories::license_repo_impl::LicenseRepoImpl;
use crate::infrastructure::repositories::schema_repo_impl::SchemaRepoImpl;
use crate::infrastructure::repositories::shareable_link_repo_impl::ShareableLinkRepoImpl;
use crate::infrastructure::repositories::team_repo_impl::TeamRepoImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use crate::infrastructure::repositories::webhook_event_repo_impl::WebhookEventRepoImpl;
use crate::presentation::graphql::schema::ResolverRepositories;
use crate::presentation::graphql::{build_schema, AppSchema, GraphQLResolvers};
use crate::presentation::handlers::{analytics_handler, graphql_handler};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{routing::get, Extension, Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由依赖的共享状态
#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub auth: AuthState,
}

impl AppState {
    /// 基于数据库连接组装仓库、服务、解析器和 GraphQL schema
    pub fn from_db(db: Arc<DatabaseConnection>, pagination: PaginationSettings) -> Self {
        let team_repo = Arc::new(TeamRepoImpl::new(db.clone()));
        let repos = ResolverRepositories {
            team: team_repo,
            license: Arc::new(LicenseRepoImpl::new(db.clone())),
            schema: Arc::new(SchemaRepoImpl::new(db.clone())),
            shareable_link: Arc::new(ShareableLinkRepoImpl::new(db.clone())),
            webhook_event: Arc::new(WebhookEventRepoImpl::new(db.clone())),
        };

        Self {
            schema: build_schema(GraphQLResolvers::new(repos, pagination)),
            auth: AuthState {
                user_repo: Arc::new(UserRepoImpl::new(db)),
            },
        }
    }
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/analytics/cubes", get(analytics_handler::list_cubes))
        .route(
            "/v1/analytics/cubes/{name}",
            get(analytics_handler::get_cube),
        );

    let graphql_routes = Router::new()
        .route(
            "/graphql",
            get(graphql_handler::graphiql).post(graphql_handler::graphql),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.auth,
            auth_middleware,
        ))
        .layer(Extension(state.schema));

    Router::new()
        .merge(public_routes)
        .merge(graphql_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> Json<Value> {
    Json(json!({ "version": env!("CARGO_PKG_VERSION") }))
}
