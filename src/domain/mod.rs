// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 错误类型（errors）：仓库错误和解析器错误
/// - 领域模型（models）：核心业务实体和数据结构
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：带权限范围的查找与创建逻辑
///
/// 领域层不依赖于任何外部实现，具体的数据访问由基础设施层提供。
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
