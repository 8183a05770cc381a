// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_and_teams;
mod m20250301_000002_create_licenses;
mod m20250301_000003_create_schemas_and_links;
mod m20250301_000004_create_webhook_events;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回按执行顺序排列的迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_and_teams::Migration),
            Box::new(m20250301_000002_create_licenses::Migration),
            Box::new(m20250301_000003_create_schemas_and_links::Migration),
            Box::new(m20250301_000004_create_webhook_events::Migration),
        ]
    }
}
