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

use super::errors::require_user;
use super::schema::GraphQLResolvers;
use super::types::ShareableLinkObject;
use async_graphql::{Context, ErrorExtensions, Object, Result};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// 为数据模式生成分享链接，已存在时直接返回
    async fn generate_shareable_link(
        &self,
        ctx: &Context<'_>,
        schema_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLinkObject> {
        let user = require_user(ctx)?;
        let resolvers = ctx.data::<GraphQLResolvers>()?;

        resolvers
            .shareable_link
            .generate_shareable_link(user, schema_id, enable_sharing)
            .await
            .map(Into::into)
            .map_err(|e| e.extend())
    }

    async fn update_share_link(
        &self,
        ctx: &Context<'_>,
        link_id: i32,
        enable_sharing: bool,
    ) -> Result<ShareableLinkObject> {
        let user = require_user(ctx)?;
        let resolvers = ctx.data::<GraphQLResolvers>()?;

        resolvers
            .shareable_link
            .update_share_link(user, link_id, enable_sharing)
            .await
            .map(Into::into)
            .map_err(|e| e.extend())
    }
}
