// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PaginationSettings;
use crate::domain::errors::RepositoryError;
use crate::domain::models::pagination::{
    PageRequest, Paginated, PaginationMeta, PaginationOptions,
};
use std::future::Future;

/// 分页服务
///
/// 将调用方的分页参数归一化为页请求，执行查询并组装分页响应信封
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationService {
    settings: PaginationSettings,
}

impl PaginationService {
    pub fn new(settings: PaginationSettings) -> Self {
        Self { settings }
    }

    /// 归一化分页参数
    ///
    /// 未指定页码时为第 1 页；未指定条数时使用默认值；条数不超过配置上限
    pub fn page_request(&self, options: &PaginationOptions) -> PageRequest {
        let limit = options
            .limit
            .unwrap_or(self.settings.default_limit)
            .min(self.settings.max_limit);
        PageRequest::new(options.page.unwrap_or(1), limit)
    }

    /// 执行分页查询
    ///
    /// # 参数
    ///
    /// * `options` - 调用方提供的分页参数
    /// * `fetch` - 根据页请求返回当前页记录和总数的查询
    ///
    /// # 返回值
    ///
    /// * `Ok(Paginated<T>)` - 分页响应信封
    /// * `Err(RepositoryError)` - 查询出错
    pub async fn paginate<T, F, Fut>(
        &self,
        options: &PaginationOptions,
        fetch: F,
    ) -> Result<Paginated<T>, RepositoryError>
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<(Vec<T>, u64), RepositoryError>>,
    {
        let request = self.page_request(options);
        let (data, total_count) = fetch(request).await?;
        let pagination = PaginationMeta::new(request, total_count, data.len() as u64);

        Ok(Paginated { pagination, data })
    }
}
