// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::PaginationOptions;
use crate::domain::models::webhook::WebhookEventFilter;
use serde::{Deserialize, Serialize};

/// 可选携带许可证密钥的输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseKeyInput {
    /// 许可证密钥，缺省时为调用方自动挑选许可证
    pub license_key: Option<String>,
}

impl LicenseKeyInput {
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            license_key: Some(license_key.into()),
        }
    }
}

/// Webhook事件查询选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookEventOptions {
    /// 分页参数
    pub pagination: PaginationOptions,
    /// 过滤条件
    pub filter: WebhookEventFilter,
}
