// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 分享链接实体
///
/// 面向公众的访问令牌，允许未认证的调用方以受限方式读取某个数据模式。
/// 每个数据模式最多对应一个分享链接。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareableLink {
    /// 分享链接唯一标识符
    pub id: i32,
    /// 公开密钥
    pub key: String,
    /// 关联的数据模式ID
    pub schema_id: i32,
    /// 是否启用分享
    pub enable_sharing: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 待创建的分享链接
#[derive(Debug, Clone, PartialEq)]
pub struct NewShareableLink {
    pub key: String,
    pub schema_id: i32,
    pub enable_sharing: bool,
}

impl NewShareableLink {
    /// 为数据模式生成一个带随机公开密钥的分享链接
    pub fn for_schema(schema_id: i32, enable_sharing: bool) -> Self {
        Self {
            key: Uuid::new_v4().to_string(),
            schema_id,
            enable_sharing,
        }
    }
}
