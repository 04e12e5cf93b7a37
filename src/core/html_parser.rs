use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::{DAY_GROUPS, HEADING_DAY_TOKENS};
use crate::core::finals_index::FinalsIndex;
use crate::error::finals::FinalsError;
use crate::model::finals_entry::FinalsEntry;

static HEADING_OR_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, table.footable").expect("static selector"));
static BODY_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("static selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));
static PAREN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([A-Za-z]+)\s*\)").expect("static regex"));

/// Walks every `table.footable` on the finals page and indexes its rows under
/// the nearest preceding `<h2>`, which names the final exam day.
pub fn parse_finals_page(html: &str) -> Result<FinalsIndex, FinalsError> {
    let document = Html::parse_document(html);
    let mut index = FinalsIndex::new();
    let mut heading: Option<String> = None;
    let mut tables = 0;

    for element in document.select(&HEADING_OR_TABLE) {
        if element.value().name() == "h2" {
            heading = Some(element_text(&element));
            continue;
        }

        tables += 1;
        let Some(final_day) = heading.as_deref() else {
            log::warn!("finals table #{} has no heading before it, skipping", tables);
            continue;
        };
        for entry in parse_table(&element, final_day) {
            index.insert(entry);
        }
    }

    if tables == 0 {
        return Err(FinalsError::new("no finals tables (table.footable) found on page"));
    }
    log::info!("parsed {} finals entries from {} tables", index.len(), tables);
    Ok(index)
}

fn parse_table(table: &ElementRef, final_day: &str) -> Vec<FinalsEntry> {
    let mut entries = Vec::new();
    for row in table.select(&BODY_ROW) {
        let cells: Vec<String> = row.select(&CELL).map(|c| element_text(&c)).collect();

        let (class_time, days_cell, final_time) = match cells.as_slice() {
            [time, days, final_time, ..] => (time, Some(days.as_str()), final_time),
            [time, final_time] => (time, None, final_time),
            _ => {
                log::warn!("skipping finals row under {:?} with {} cells", final_day, cells.len());
                continue;
            }
        };

        let class_days = match days_cell.filter(|d| !d.is_empty()) {
            Some(days) => day_token_from_cell(days),
            None => match day_token_from_heading(final_day) {
                Some(token) => token.to_string(),
                None => {
                    log::warn!("no day token for {} under {:?}, skipping", class_time, final_day);
                    continue;
                }
            },
        };

        entries.push(FinalsEntry {
            class_time: class_time.clone(),
            class_days,
            final_day: final_day.to_string(),
            final_time: final_time.clone(),
        });
    }
    entries
}

/// "Tues/Thurs (TR)" gives "TR"; anything without a known group in
/// parentheses is kept as written.
pub fn day_token_from_cell(cell: &str) -> String {
    PAREN_TOKEN
        .captures(cell)
        .map(|caps| caps[1].to_uppercase())
        .filter(|token| DAY_GROUPS.contains(&token.as_str()))
        .unwrap_or_else(|| cell.to_string())
}

/// Maps a weekday heading such as "Tuesday/Thursday Classes" to its token.
pub fn day_token_from_heading(heading: &str) -> Option<&'static str> {
    let lower = heading.to_lowercase();
    HEADING_DAY_TOKENS
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map(|(_, token)| *token)
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join("")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
