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
use super::types::{
    LicenseKeyInputObject, ShareableLinkObject, ShareableLinkSchemaObject,
    WebhookEventOptionsInput, WebhookEventResponse,
};
use async_graphql::{Context, ErrorExtensions, Object, Result};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 分页查询调用方团队的 Webhook 事件
    async fn webhook_events(
        &self,
        ctx: &Context<'_>,
        license: Option<LicenseKeyInputObject>,
        options: Option<WebhookEventOptionsInput>,
    ) -> Result<WebhookEventResponse> {
        let user = require_user(ctx)?;
        let resolvers = ctx.data::<GraphQLResolvers>()?;

        resolvers
            .webhook
            .get_webhook_events(
                user,
                &license.unwrap_or_default().into(),
                &options.unwrap_or_default().into(),
            )
            .await
            .map(Into::into)
            .map_err(|e| e.extend())
    }

    /// 按公开密钥查找分享链接
    async fn shareable_link_by_key(
        &self,
        ctx: &Context<'_>,
        key: String,
    ) -> Result<ShareableLinkObject> {
        let resolvers = ctx.data::<GraphQLResolvers>()?;

        resolvers
            .shareable_link
            .get_shareable_link_by_key(&key)
            .await
            .map(Into::into)
            .map_err(|e| e.extend())
    }

    /// 通过分享链接和许可证密钥读取数据模式，无需登录
    async fn shareable_link_schema(
        &self,
        ctx: &Context<'_>,
        license: LicenseKeyInputObject,
        shareable_link_key: String,
    ) -> Result<ShareableLinkSchemaObject> {
        let resolvers = ctx.data::<GraphQLResolvers>()?;

        resolvers
            .shareable_link
            .get_shareable_link_schema(&license.into(), &shareable_link_key)
            .await
            .map(Into::into)
            .map_err(|e| e.extend())
    }
}
