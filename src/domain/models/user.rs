// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户实体
///
/// 表示发起请求的调用方身份，由认证中间件根据访问令牌解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: i32,
    /// 用户邮箱
    pub email: String,
    /// 用户名称
    pub name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}
