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

use super::cube::{
    CubeDefinition, Dimension, DimensionType, Join, Measure, MeasureFormat, MeasureType,
    RefreshKey, Relationship, RollingWindow, Segment,
};

pub const NAME: &str = "ContactCenterEvent";

/// 呼叫中心处置结果及对应的计数度量
const DISPOSITIONS: [(&str, &str); 7] = [
    ("countConnectedEvents", "Connected"),
    ("countVoicemailEvents", "Left Voicemail"),
    ("countNoAnswerEvents", "No Answer"),
    ("countScheduledCallbackEvents", "Scheduled Call Back"),
    ("countInvalidNumberEvents", "Invalid Number"),
    ("countGeneralCallbackEvents", "General Call Back"),
    ("countBusyEvents", "Busy"),
];

/// 呼叫中心事件 cube
///
/// 数据源为 `prod.contact_center_events`，通过 `loan_id` 关联 `Loan`。
pub fn cube() -> CubeDefinition {
    let mut measures = vec![
        Measure::new("countEvents", "1", MeasureType::Sum).with_format(MeasureFormat::Number),
        Measure::new("countEventsR30", "1", MeasureType::Sum)
            .with_format(MeasureFormat::Number)
            .with_rolling_window(RollingWindow::trailing("30 day")),
        Measure::new("maxUpdatedAt", "updated", MeasureType::Max),
    ];
    measures.extend(DISPOSITIONS.iter().map(|(name, disposition)| {
        Measure::new(name, "1", MeasureType::Count)
            .with_format(MeasureFormat::Number)
            .with_filter(&format!("{{disposition}} = '{}'", disposition))
    }));

    CubeDefinition {
        name: NAME.to_string(),
        sql: "SELECT loan_id, activity, date, credit_union, call_type, updated, disposition \
              FROM prod.contact_center_events"
            .to_string(),
        joins: vec![Join {
            name: "Loan".to_string(),
            relationship: Relationship::BelongsTo,
            sql: "{Loan}.loan_id = {CUBE}.loan_id".to_string(),
        }],
        measures,
        dimensions: vec![
            // composite key, a loan has many events per day
            Dimension::new(
                "loanId",
                "{CUBE}.activity || {CUBE}.date || {CUBE}.loan_id",
                DimensionType::String,
            )
            .as_primary_key(),
            Dimension::new("creditUnion", "credit_union", DimensionType::String),
            Dimension::new("callType", "call_type", DimensionType::String),
            Dimension::new("date", "date", DimensionType::Time),
            Dimension::new("activity", "activity", DimensionType::String),
            Dimension::new("disposition", "disposition", DimensionType::String),
        ],
        segments: vec![Segment {
            name: "EventIsCall".to_string(),
            sql: "activity = 'call'".to_string(),
        }],
        refresh_key: Some(RefreshKey {
            sql: "SELECT MAX(updated) FROM prod.contact_center_events".to_string(),
        }),
    }
}
