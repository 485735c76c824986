//! Category layout: records bucketed by `@category`, sorted by `@name`, with
//! `@modifies` records attached to the record they modify.

use crate::error::{Diagnostics, Warning};
use crate::model::{Categories, CategoryEntry, ParamValue, ParsedRecord};

pub const CATEGORY_PARAM: &str = "category";
pub const NAME_PARAM: &str = "name";

/// Parameters naming the record a modifier belongs to, in lookup order.
pub const PARENT_PARAMS: &[&str] = &["modifies", "parent"];

fn parent_of(record: &ParsedRecord) -> Option<&str> {
    PARENT_PARAMS
        .iter()
        .find_map(|p| match record.parameters.get(*p) {
            Some(ParamValue::Text(parent)) => Some(parent.as_str()),
            _ => None,
        })
}

/// A designator written as a bare flag, with no parent name after it.
fn bare_parent(record: &ParsedRecord) -> Option<&'static str> {
    PARENT_PARAMS
        .iter()
        .copied()
        .find(|p| record.parameters.get(*p).is_some_and(ParamValue::is_flag))
}

/// Build the category map from records in discovery order.
pub fn assemble(records: Vec<ParsedRecord>, diag: &mut Diagnostics) -> Categories {
    let mut categories = Categories::new();
    let mut modifiers = Vec::new();
    let mut uncategorized = 0usize;

    for record in records {
        if parent_of(&record).is_some() {
            modifiers.push(record);
            continue;
        }
        if let Some(param) = bare_parent(&record) {
            diag.warn(Warning::EmptyParent {
                path: record.source_path.clone(),
                name: record.param(NAME_PARAM).unwrap_or_default().to_string(),
                param,
            });
        }
        let Some(category) = record.param(CATEGORY_PARAM).map(str::to_string) else {
            uncategorized += 1;
            continue;
        };
        categories.entry(category).or_default().push(CategoryEntry {
            record,
            modifiers: Vec::new(),
        });
    }

    if uncategorized > 0 {
        log::debug!("{} record(s) without @category left out", uncategorized);
    }

    // Stable: equal names keep discovery order.
    for entries in categories.values_mut() {
        entries.sort_by(|a, b| a.name().cmp(b.name()));
    }

    for record in modifiers {
        let parent = parent_of(&record).unwrap_or_default().to_string();
        let category = record.param(CATEGORY_PARAM).unwrap_or_default().to_string();
        let target = categories
            .get_mut(&category)
            .and_then(|entries| entries.iter_mut().find(|e| e.name() == parent));

        match target {
            Some(entry) => entry.modifiers.push(record),
            None => diag.warn(Warning::MissingReferencedParent {
                path: record.source_path.clone(),
                name: record.param(NAME_PARAM).unwrap_or_default().to_string(),
                parent,
                category,
            }),
        }
    }

    categories
}
