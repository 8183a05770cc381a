// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 团队实体
///
/// 团队拥有许可证、数据模式和分享链接，是权限隔离的基本单位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// 团队唯一标识符
    pub id: i32,
    /// 团队名称
    pub name: String,
    /// 团队所有者的用户ID
    pub owner_id: i32,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// 判断用户是否为团队所有者
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.owner_id == user_id
    }
}
