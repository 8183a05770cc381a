// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 解析器模块
///
/// 每个解析器方法都是一个短流程：校验标识符格式，解析授权范围，
/// 委托给数据访问服务，再把结果整理成响应对象
pub mod shareable_link_resolver;
pub mod webhook_resolver;
