// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 允许请求的最大页码
pub const MAX_PAGE: u64 = 1_000_000;

/// 分页参数
///
/// `page` 从 1 开始计数；`limit` 在超出配置上限时会被截断
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PaginationOptions {
    /// 页码（从 1 开始）
    #[validate(range(min = 1, max = MAX_PAGE))]
    pub page: Option<u64>,
    /// 每页条数
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
}

/// 归一化后的分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 当前页码（从 1 开始）
    pub page: u64,
    /// 每页条数
    pub limit: u64,
    /// 跳过的记录数
    pub offset: u64,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit).min(i64::MAX as u64),
        }
    }
}

/// 分页元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// 符合条件的记录总数
    pub total_count: u64,
    /// 当前页实际返回的记录数
    pub on_page: u64,
    /// 总页数
    pub page_count: u64,
    /// 当前页码
    pub current_page: u64,
    /// 跳过的记录数
    pub offset: u64,
    /// 每页条数
    pub limit: u64,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total_count: u64, on_page: u64) -> Self {
        Self {
            total_count,
            on_page,
            page_count: total_count.div_ceil(request.limit),
            current_page: request.page,
            offset: request.offset,
            limit: request.limit,
        }
    }
}

/// 分页响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// 分页元数据
    pub pagination: PaginationMeta,
    /// 当前页数据
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// 转换当前页中的每条记录，保留分页元数据
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            pagination: self.pagination,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
