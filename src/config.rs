use std::path::PathBuf;

pub const FINALS_URL: &str = "https://www.unr.edu/admissions/records/academic-calendar/finals-schedule";
pub const INPUT_FILE: &str = "class_schedule.csv";
pub const OUTPUT_FILE: &str = "finals_schedule.csv";

/// Order in which day letters are assembled into a token. Matches the
/// convention the finals page uses ("TR", not "RT").
pub const DAY_PRIORITY: [&str; 5] = ["T", "R", "M", "W", "F"];

/// Day groups the finals page is known to print in parentheses.
pub const DAY_GROUPS: [&str; 10] = ["M", "T", "W", "R", "F", "MW", "TR", "MWF", "MTWR", "MTWRF"];

/// Weekday names as they appear in table headings, longest first so that
/// "monday/wednesday/friday" wins over "monday".
pub const HEADING_DAY_TOKENS: [(&str, &str); 12] = [
    ("monday through friday", "MTWRF"),
    ("monday-friday", "MTWRF"),
    ("monday through thursday", "MTWR"),
    ("monday-thursday", "MTWR"),
    ("monday/wednesday/friday", "MWF"),
    ("monday/wednesday", "MW"),
    ("tuesday/thursday", "TR"),
    ("monday", "M"),
    ("tuesday", "T"),
    ("wednesday", "W"),
    ("thursday", "R"),
    ("friday", "F"),
];

#[derive(Clone, Debug)]
pub struct FinalsConfig {
    pub finals_url: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub day_priority: Vec<String>,
}

impl Default for FinalsConfig {
    fn default() -> Self {
        FinalsConfig {
            finals_url: FINALS_URL.to_string(),
            input_path: PathBuf::from(INPUT_FILE),
            output_path: PathBuf::from(OUTPUT_FILE),
            day_priority: DAY_PRIORITY.iter().map(|d| d.to_string()).collect(),
        }
    }
}
