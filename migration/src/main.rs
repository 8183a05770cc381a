// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 数据库迁移命令行入口
///
/// 连接地址读取自 `DATABASE_URL`，例如 `migration up` 或 `migration fresh`
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
