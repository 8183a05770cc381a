// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 解析器错误类型
///
/// 调用方只会看到两类错误：携带出错参数名的输入校验错误，以及
/// 下游创建失败等通用错误。数据库错误按通用错误对外暴露。
#[derive(Error, Debug)]
pub enum ResolverError {
    /// 输入校验错误，`invalid_args` 列出出错的参数名
    #[error("{message}")]
    UserInput {
        message: String,
        invalid_args: Vec<String>,
    },
    /// 受保护的字段被匿名调用
    #[error("Authentication required.")]
    Unauthenticated,
    /// 通用失败
    #[error("{0}")]
    Failure(String),
    /// 仓库错误
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ResolverError {
    /// 构造输入校验错误
    pub fn user_input(message: impl Into<String>, invalid_arg: &str) -> Self {
        Self::UserInput {
            message: message.into(),
            invalid_args: vec![invalid_arg.to_string()],
        }
    }

    /// 返回出错的参数名列表，非输入校验错误返回空切片
    pub fn invalid_args(&self) -> &[String] {
        match self {
            Self::UserInput { invalid_args, .. } => invalid_args,
            _ => &[],
        }
    }

    /// 用于指标和日志的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserInput { .. } => "user_input",
            Self::Unauthenticated => "unauthenticated",
            Self::Failure(_) => "failure",
            Self::Repository(_) => "repository",
        }
    }
}
