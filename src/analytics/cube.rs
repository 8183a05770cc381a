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
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// 成员引用，例如 `{disposition}` 或 `{Loan.loan_id}`
static MEMBER_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)?)\}")
        .expect("member reference pattern is valid")
});

/// 指向当前 cube 自身的引用
const SELF_REFERENCE: &str = "CUBE";

/// Cube 定义校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeValidationError {
    #[error("cube `{0}` has no primary key dimension")]
    MissingPrimaryKey(String),
    #[error("cube `{cube}` has more than one primary key dimension: {members:?}")]
    MultiplePrimaryKeys { cube: String, members: Vec<String> },
    #[error("cube `{cube}` defines member `{member}` more than once")]
    DuplicateMember { cube: String, member: String },
    #[error("measure `{measure}` in cube `{cube}` references unknown member `{reference}`")]
    UnknownReference {
        cube: String,
        measure: String,
        reference: String,
    },
    #[error("cube `{cube}` has a join with an empty target or condition")]
    EmptyJoin { cube: String },
}

/// Cube 数据模型文档（`cubes:` 根节点）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeDocument {
    pub cubes: Vec<CubeDefinition>,
}

impl CubeDocument {
    pub fn new(cubes: Vec<CubeDefinition>) -> Self {
        Self { cubes }
    }

    /// 序列化为 Cube 的 YAML 数据模型
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// 分析型数据集定义
///
/// 描述一个基于 SQL 源的 cube，包括关联、度量、维度、分段和刷新键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeDefinition {
    pub name: String,
    pub sql: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub measures: Vec<Measure>,
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_key: Option<RefreshKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    BelongsTo,
    HasOne,
    HasMany,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    /// 目标 cube 名称
    pub name: String,
    pub relationship: Relationship,
    pub sql: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    Count,
    CountDistinct,
    Sum,
    Avg,
    Min,
    Max,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureFormat {
    Number,
    Percent,
    Currency,
}

/// 滚动窗口，例如 `trailing: 30 day`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading: Option<String>,
}

impl RollingWindow {
    pub fn trailing(window: impl Into<String>) -> Self {
        Self {
            trailing: Some(window.into()),
            leading: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureFilter {
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub name: String,
    pub sql: String,
    #[serde(rename = "type")]
    pub measure_type: MeasureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<MeasureFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_window: Option<RollingWindow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<MeasureFilter>,
}

impl Measure {
    pub fn new(name: &str, sql: &str, measure_type: MeasureType) -> Self {
        Self {
            name: name.to_string(),
            sql: sql.to_string(),
            measure_type,
            format: None,
            rolling_window: None,
            filters: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: MeasureFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_rolling_window(mut self, window: RollingWindow) -> Self {
        self.rolling_window = Some(window);
        self
    }

    pub fn with_filter(mut self, sql: &str) -> Self {
        self.filters.push(MeasureFilter {
            sql: sql.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionType {
    String,
    Number,
    Time,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub sql: String,
    #[serde(rename = "type")]
    pub dimension_type: DimensionType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,
}

impl Dimension {
    pub fn new(name: &str, sql: &str, dimension_type: DimensionType) -> Self {
        Self {
            name: name.to_string(),
            sql: sql.to_string(),
            dimension_type,
            primary_key: false,
        }
    }

    pub fn as_primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshKey {
    pub sql: String,
}

impl CubeDefinition {
    /// 度量、维度和分段的全部成员名称
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.measures
            .iter()
            .map(|m| m.name.as_str())
            .chain(self.dimensions.iter().map(|d| d.name.as_str()))
            .chain(self.segments.iter().map(|s| s.name.as_str()))
    }

    /// 主键维度
    pub fn primary_key(&self) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.primary_key)
    }

    /// 校验 cube 定义的结构完整性
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 定义有效
    /// * `Err(CubeValidationError)` - 第一个发现的问题
    pub fn validate(&self) -> Result<(), CubeValidationError> {
        let primary_keys: Vec<String> = self
            .dimensions
            .iter()
            .filter(|d| d.primary_key)
            .map(|d| d.name.clone())
            .collect();
        match primary_keys.len() {
            0 => return Err(CubeValidationError::MissingPrimaryKey(self.name.clone())),
            1 => {}
            _ => {
                return Err(CubeValidationError::MultiplePrimaryKeys {
                    cube: self.name.clone(),
                    members: primary_keys,
                })
            }
        }

        let mut seen = HashSet::new();
        for member in self.member_names() {
            if !seen.insert(member) {
                return Err(CubeValidationError::DuplicateMember {
                    cube: self.name.clone(),
                    member: member.to_string(),
                });
            }
        }

        if self
            .joins
            .iter()
            .any(|j| j.name.trim().is_empty() || j.sql.trim().is_empty())
        {
            return Err(CubeValidationError::EmptyJoin {
                cube: self.name.clone(),
            });
        }

        for measure in &self.measures {
            for filter in &measure.filters {
                for reference in references(&filter.sql) {
                    if !self.resolves(reference) {
                        return Err(CubeValidationError::UnknownReference {
                            cube: self.name.clone(),
                            measure: measure.name.clone(),
                            reference: reference.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn resolves(&self, reference: &str) -> bool {
        match reference.split_once('.') {
            Some((cube, _)) => cube == SELF_REFERENCE || self.joins.iter().any(|j| j.name == cube),
            None => {
                reference == SELF_REFERENCE
                    || self.joins.iter().any(|j| j.name == reference)
                    || self.dimensions.iter().any(|d| d.name == reference)
            }
        }
    }
}

fn references(sql: &str) -> impl Iterator<Item = &str> {
    MEMBER_REFERENCE
        .captures_iter(sql)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}
