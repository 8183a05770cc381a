// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 许可证仓库（license_repository）：按密钥、用户或团队查找许可证
/// - 数据模式仓库（schema_repository）：查找数据模式
/// - 分享链接仓库（shareable_link_repository）：管理分享链接
/// - 团队仓库（team_repository）：查找团队及成员关系
/// - 用户仓库（user_repository）：按访问令牌解析调用方
/// - Webhook事件仓库（webhook_event_repository）：分页查询Webhook事件
pub mod license_repository;
pub mod schema_repository;
pub mod shareable_link_repository;
pub mod team_repository;
pub mod user_repository;
pub mod webhook_event_repository;

#[cfg(test)]
pub mod mock;
