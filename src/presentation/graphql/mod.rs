// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! GraphQL 接口
//!
//! - 查询：Webhook 事件分页、分享链接及其公开数据模式
//! - 变更：生成分享链接、更新分享开关
//! - 错误：`ResolverError` 到带 `extensions.code` 的 GraphQL 错误的转换

pub mod errors;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, AppSchema, GraphQLResolvers};
