// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators::normalize_uuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 许可证实体
///
/// 授予团队访问权限的记录，以唯一的 UUID 字符串作为密钥
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// 许可证唯一标识符
    pub id: i32,
    /// 许可证密钥
    pub key: String,
    /// 所属团队ID
    pub team_id: i32,
    /// 许可证签发给的用户ID
    pub user_id: Option<i32>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl License {
    /// 判断许可证密钥是否与给定值一致
    ///
    /// 两侧都是 UUID 时按标准形式比较
    pub fn matches_key(&self, key: &str) -> bool {
        match (normalize_uuid(&self.key), normalize_uuid(key)) {
            (Some(stored), Some(given)) => stored == given,
            _ => self.key == key.trim(),
        }
    }
}
