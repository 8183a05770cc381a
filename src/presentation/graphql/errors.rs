// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::errors::ResolverError;
use crate::domain::models::user::User;
use async_graphql::{Context, ErrorExtensions, Value};

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

impl ErrorExtensions for ResolverError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            ResolverError::UserInput {
                message,
                invalid_args,
            } => async_graphql::Error::new(message.as_str()).extend_with(|_, e| {
                e.set("code", BAD_USER_INPUT);
                e.set(
                    "invalidArgs",
                    Value::List(
                        invalid_args
                            .iter()
                            .map(|arg| Value::from(arg.as_str()))
                            .collect(),
                    ),
                );
            }),
            ResolverError::Unauthenticated => async_graphql::Error::new(self.to_string())
                .extend_with(|_, e| e.set("code", UNAUTHENTICATED)),
            ResolverError::Failure(message) => async_graphql::Error::new(message.as_str())
                .extend_with(|_, e| e.set("code", INTERNAL_SERVER_ERROR)),
            ResolverError::Repository(err) => {
                tracing::error!("Repository error while resolving field: {}", err);
                async_graphql::Error::new("Internal server error")
                    .extend_with(|_, e| e.set("code", INTERNAL_SERVER_ERROR))
            }
        }
    }
}

/// 取出当前调用方，匿名请求返回 `UNAUTHENTICATED`
pub fn require_user<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a User> {
    ctx.data_opt::<User>()
        .ok_or_else(|| ResolverError::Unauthenticated.extend())
}
