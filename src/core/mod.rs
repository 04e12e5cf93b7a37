pub mod finals;
pub mod finals_index;
pub mod html_parser;
pub mod normalize;
pub mod reconciler;
pub mod report;
pub mod roster;
