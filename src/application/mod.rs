// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含解析器及其数据传输对象，负责在请求与领域服务之间协调
pub mod dto;
pub mod resolvers;
