use serde::Serialize;

/// A row of the published finals schedule.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct FinalsEntry {
    pub class_time: String,
    pub class_days: String,
    pub final_day: String,
    pub final_time: String,
}

/// Lookup key into the finals index: (class time, day token).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    pub time: String,
    pub day_token: String,
}

impl ScheduleKey {
    pub fn new(time: &str, day_token: &str) -> Self {
        ScheduleKey {
            time: time.to_string(),
            day_token: day_token.to_string(),
        }
    }
}

/// An output row of `finals_schedule.csv`.
#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct FinalsRow {
    #[serde(rename = "Class")]
    pub class_name: String,

    #[serde(rename = "Class Time")]
    pub class_time: String,

    #[serde(rename = "Class Days")]
    pub class_days: String,

    #[serde(rename = "Final Day")]
    pub final_day: String,

    #[serde(rename = "Final Time")]
    pub final_time: String,
}
