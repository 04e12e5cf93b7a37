pub mod class_session;
pub mod finals_entry;
