use serde::Deserialize;

/// One roster row: a class meeting on a single day.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct ClassSession {
    #[serde(rename = "Class")]
    pub class_name: String,

    /// Normally one of M, T, W, R, F.
    #[serde(rename = "Days")]
    pub day: String,

    #[serde(rename = "Time")]
    pub time: String,
}

impl ClassSession {
    pub fn new(class_name: &str, day: &str, time: &str) -> Self {
        ClassSession {
            class_name: class_name.to_string(),
            day: day.to_string(),
            time: time.to_string(),
        }
    }
}
