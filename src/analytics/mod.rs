// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分析模块
///
/// 提供 BI 工具使用的 cube 数据模型定义及其注册表
pub mod contact_center_event;
pub mod cube;

use cube::CubeDefinition;
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<CubeDefinition>> = Lazy::new(|| vec![contact_center_event::cube()]);

/// 已注册的全部 cube
pub fn catalog() -> &'static [CubeDefinition] {
    &CATALOG
}

/// 按名称查找 cube
pub fn find_cube(name: &str) -> Option<&'static CubeDefinition> {
    CATALOG.iter().find(|c| c.name == name)
}

pub fn cube_names() -> Vec<&'static str> {
    CATALOG.iter().map(|c| c.name.as_str()).collect()
}
