// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::analytics::{self, cube::CubeDocument};
use crate::domain::errors::RepositoryError;
use crate::presentation::errors::AppError;

/// 列出已注册的 cube 名称
pub async fn list_cubes() -> impl IntoResponse {
    Json(json!({ "cubes": analytics::cube_names() }))
}

/// 以 YAML 数据模型返回单个 cube 定义
pub async fn get_cube(Path(name): Path<String>) -> Result<Response, AppError> {
    debug!("Exporting cube {}", name);
    let cube = analytics::find_cube(&name).ok_or(RepositoryError::NotFound)?;
    let yaml = CubeDocument::new(vec![cube.clone()]).to_yaml()?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response())
}
