//! Reading line-item files.
//!
//! Files may be flat (`sales = 500000`) or grouped
//! (`[revenue] sales = 500000`); any format the `config` crate reads works.

use std::collections::HashMap;
use std::path::Path;

use config::Source;

use budget_trainer_core::budget::{LineItem, LineItemSet};
use budget_trainer_shared::{AppError, AppResult};
use tracing::debug;

/// Dotted path, leaf key and raw value of one file entry.
type Entry = (String, String, String);

/// Loads a line-item set, defaulting absent or non-numeric entries to zero.
///
/// A line item that appears more than once (for example both flat and under
/// `[revenue]`) is rejected.
pub fn load_line_items(path: &Path) -> AppResult<LineItemSet> {
    if !path.exists() {
        return Err(AppError::Io(format!("{}: file not found", path.display())));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(true))
        .build()?;

    let mut entries = Vec::new();
    flatten("", settings.collect()?, &mut entries);
    entries.sort();
    reject_duplicates(&entries)?;
    debug!(path = %path.display(), entries = entries.len(), "line items read");

    Ok(LineItemSet::from_raw(
        entries.into_iter().map(|(_, key, value)| (key, value)),
    ))
}

/// Collects leaf values; group names such as `revenue`/`expenses` only
/// survive in the dotted path.
fn flatten(prefix: &str, table: HashMap<String, config::Value>, out: &mut Vec<Entry>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value.clone().into_table() {
            Ok(nested) => flatten(&path, nested, out),
            Err(_) => {
                if let Ok(text) = value.into_string() {
                    out.push((path, key, text));
                }
            }
        }
    }
}

fn reject_duplicates(entries: &[Entry]) -> AppResult<()> {
    let mut seen: HashMap<LineItem, &str> = HashMap::new();
    for (path, key, _) in entries {
        let Ok(item) = key.parse::<LineItem>() else {
            continue;
        };
        if let Some(first) = seen.insert(item, path) {
            return Err(AppError::Validation(format!(
                "{} is given more than once ({first}, {path})",
                item.key()
            )));
        }
    }
    Ok(())
}
