// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含 GraphQL 入口和分析数据模型导出端点
pub mod analytics_handler;
pub mod graphql_handler;
