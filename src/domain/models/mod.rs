// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 用户（user）：发起请求的调用方
/// - 团队（team）：拥有许可证、数据模式和分享链接的组织
/// - 许可证（license）：授予团队访问权限的记录
/// - 数据模式（schema）：团队拥有的数据结构定义
/// - 分享链接（shareable_link）：面向公众的数据模式访问令牌
/// - Webhook事件（webhook）：发送给团队回调地址的通知记录
/// - 分页（pagination）：分页参数与响应信封
pub mod license;
pub mod pagination;
pub mod schema;
pub mod shareable_link;
pub mod team;
pub mod user;
pub mod webhook;
