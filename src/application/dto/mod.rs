// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义解析器的输入与输出结构
pub mod shareable_link_response;
pub mod webhook_event_request;
