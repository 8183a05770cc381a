// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含解析器依赖的协作服务，每个服务只暴露单一的异步
/// 查找或创建操作：
/// - 身份服务（identity_service）：标识符校验与许可证挑选
/// - 分页服务（pagination_service）：分页参数归一化与响应信封组装
/// - 数据模式服务（schema_service）：数据模式查找
/// - 分享链接服务（shareable_link_service）：分享链接的查找、创建与更新
/// - 团队服务（team_service）：团队访问权限校验
pub mod identity_service;
pub mod pagination_service;
pub mod schema_service;
pub mod shareable_link_service;
pub mod team_service;
