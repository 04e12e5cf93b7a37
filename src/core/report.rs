use std::fs::File;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;

use crate::core::finals_index::FinalsIndex;
use crate::core::normalize::normalize_time;
use crate::core::reconciler::DayTokenReconciler;
use crate::error::finals::FinalsError;
use crate::model::class_session::ClassSession;
use crate::model::finals_entry::FinalsRow;

/// Why a class did not make it into the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Miss {
    /// The class had no sessions to reconcile.
    NoSchedule { class_name: String },
    /// The reconciled key is not on the finals page.
    NoFinal { class_name: String, time: String, day_token: String },
}

#[derive(Debug, Default)]
pub struct MatchReport {
    pub rows: Vec<FinalsRow>,
    pub misses: Vec<Miss>,
}

/// Looks up every class in the finals index. Matches and misses are both
/// announced on stdout; only matches become rows.
pub fn match_classes(
    index: &FinalsIndex,
    classes: &IndexMap<String, Vec<ClassSession>>,
    reconciler: &DayTokenReconciler,
) -> MatchReport {
    let mut report = MatchReport::default();

    for (class_name, sessions) in classes {
        let reconciled = reconciler
            .reconcile(sessions)
            .filter(|(time, day_token)| !time.is_empty() && !day_token.is_empty());
        let Some((time, day_token)) = reconciled else {
            println!("No valid schedule found for {}", class_name);
            report.misses.push(Miss::NoSchedule { class_name: class_name.clone() });
            continue;
        };

        let key_time = normalize_time(&time);
        log::debug!("{}: key ({:?}, {:?})", class_name, key_time, day_token);

        match index.lookup(&key_time, &day_token) {
            Some((final_day, final_time)) => {
                println!(
                    "Class {} at {} on {} has final on {} at {}",
                    class_name, key_time, day_token, final_day, final_time
                );
                report.rows.push(FinalsRow {
                    class_name: class_name.clone(),
                    class_time: time,
                    class_days: day_token,
                    final_day: final_day.to_string(),
                    final_time: final_time.to_string(),
                });
            }
            None => {
                println!("No final time found for {} at {} on {}", class_name, key_time, day_token);
                report.misses.push(Miss::NoFinal {
                    class_name: class_name.clone(),
                    time: key_time,
                    day_token,
                });
            }
        }
    }

    report
}

/// Writes the header and one line per row.
pub fn write_rows<W: Write>(writer: W, rows: &[FinalsRow]) -> Result<(), FinalsError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(["Class", "Class Time", "Class Days", "Final Day", "Final Time"])?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_rows_to_path(path: &Path, rows: &[FinalsRow]) -> Result<(), FinalsError> {
    let file = File::create(path)
        .map_err(|e| FinalsError::context(format!("cannot create {}", path.display()), e))?;
    write_rows(file, rows)?;
    log::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
