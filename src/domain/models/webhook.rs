// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Webhook事件实体
///
/// 记录一次向团队配置的回调地址发送的通知，包括负载和响应结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// 事件唯一标识符
    pub id: i32,
    /// 所属团队ID，用于权限隔离和归属管理
    pub team_id: i32,
    /// 事件类型，例如 `workbook.completed`
    pub event_type: String,
    /// 回调URL
    pub url: String,
    /// 事件负载数据
    pub payload: serde_json::Value,
    /// 回调响应状态码
    pub response_status: Option<i32>,
    /// 是否发送成功
    pub success: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

/// Webhook事件过滤条件
///
/// 所有条件都是可选的，未设置的条件不参与过滤
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookEventFilter {
    /// 按事件类型精确匹配
    pub event_type: Option<String>,
    /// 按发送结果过滤
    pub success: Option<bool>,
    /// 创建时间下界（含）
    pub created_after: Option<DateTime<Utc>>,
    /// 创建时间上界（含）
    pub created_before: Option<DateTime<Utc>>,
}
