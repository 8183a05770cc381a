// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, response::Html, Json};

use crate::presentation::extractors::caller::Caller;
use crate::presentation::graphql::AppSchema;

/// 执行 GraphQL 请求
///
/// 调用方（若有）作为请求数据注入，供需要身份的字段读取
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    Caller(caller): Caller,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let request = match caller {
        Some(user) => request.data(user),
        None => request,
    };

    Json(schema.execute(request).await)
}

/// GraphiQL 调试页面
pub async fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}
