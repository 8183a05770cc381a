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

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

/// 分享链接密钥允许的最大长度
pub const MAX_LINK_KEY_LENGTH: usize = 128;

static LINK_KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("link key pattern is a valid regex")
});

/// 检查字符串是否为合法的 UUID
///
/// 接受带连字符的标准形式，以及 `uuid` crate 支持的其他文本形式
pub fn is_uuid(value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok()
}

/// 将 UUID 文本归一化为小写带连字符的标准形式
///
/// 无法解析时返回 `None`
pub fn normalize_uuid(value: &str) -> Option<String> {
    Uuid::parse_str(value.trim())
        .ok()
        .map(|uuid| uuid.hyphenated().to_string())
}

/// 检查分享链接密钥格式
///
/// # 参数
///
/// * `key` - 分享链接公开密钥
///
/// # 返回值
///
/// 密钥非空、不超过 128 个字符且仅包含字母、数字、`-`、`_` 时返回 true
pub fn is_valid_link_key(key: &str) -> bool {
    !key.is_empty() && key.len() <= MAX_LINK_KEY_LENGTH && LINK_KEY_PATTERN.is_match(key)
}
