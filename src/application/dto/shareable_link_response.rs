// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::schema::Schema;
use serde::{Deserialize, Serialize};

/// 通过分享链接公开访问时返回的精简数据模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareableLinkSchemaDto {
    /// 数据模式ID（字符串形式）
    pub id: String,
    /// 数据模式名称
    pub name: String,
}

impl From<Schema> for ShareableLinkSchemaDto {
    fn from(schema: Schema) -> Self {
        Self {
            id: schema.id.to_string(),
            name: schema.name,
        }
    }
}
