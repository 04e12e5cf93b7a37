use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;

use crate::error::finals::FinalsError;
use crate::model::class_session::ClassSession;

/// Reads roster rows. The header must name `Class`, `Days` and `Time`; other
/// columns are ignored.
pub fn read_sessions<R: Read>(reader: R) -> Result<Vec<ClassSession>, FinalsError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut sessions = Vec::new();
    for row in reader.deserialize() {
        let session: ClassSession = row?;
        sessions.push(session);
    }
    Ok(sessions)
}

pub fn read_sessions_from_path(path: &Path) -> Result<Vec<ClassSession>, FinalsError> {
    let file = File::open(path)
        .map_err(|e| FinalsError::context(format!("cannot open {}", path.display()), e))?;
    let sessions = read_sessions(file)?;
    log::info!("read {} sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}

/// Groups sessions by class name, classes in order of first appearance.
pub fn group_by_class(sessions: Vec<ClassSession>) -> IndexMap<String, Vec<ClassSession>> {
    let mut groups: IndexMap<String, Vec<ClassSession>> = IndexMap::new();
    for session in sessions {
        groups.entry(session.class_name.clone()).or_default().push(session);
    }
    groups
}
