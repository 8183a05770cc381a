// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 数据模式实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// 数据模式唯一标识符
    pub id: i32,
    /// 数据模式名称
    pub name: String,
    /// 所属团队ID
    pub team_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}
