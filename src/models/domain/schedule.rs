use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Weekly,
    Monthly,
}

impl std::fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleType::Weekly => write!(f, "weekly"),
            ScheduleType::Monthly => write!(f, "monthly"),
        }
    }
}

/// A topic the caller wants scheduled. Echoed verbatim into the scheduling
/// prompt, so wire names match what the model is asked to reason about.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudyTopic {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub deadline: NaiveDate,

    pub difficulty: TopicDifficulty,

    #[validate(range(exclusive_min = 0.0))]
    pub estimated_hours: f64,
}

/// Block duration as the model emits it: either a number of hours or a
/// free-text label like "2 hours".
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockDuration {
    Hours(f64),
    Text(String),
}

impl BlockDuration {
    pub fn is_empty(&self) -> bool {
        match self {
            // Zero is rejected the same way a missing field is.
            BlockDuration::Hours(hours) => *hours == 0.0,
            BlockDuration::Text(text) => text.trim().is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    pub date: String,
    pub time_slot: String,
    pub topic: String,
    pub activity: String,
    pub duration: BlockDuration,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_hours: f64,
    pub topics_per_week: f64,
    pub suggested_pace: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Schedule {
    pub blocks: Vec<ScheduleBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ScheduleSummary>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
