//! Set-to-string rendering for tags, owners and subscribers.

use indexmap::IndexSet;

/// Render a set as a comma separated list, preserving insertion order.
///
/// Members stored as JSON string arrays (e.g. `["a", "b"]`) are unpacked
/// and flattened. Blank members and duplicates after flattening are
/// dropped. Returns an empty string when nothing is left; callers pick
/// their own placeholder.
pub fn prettify_set(values: &IndexSet<String>) -> String {
    let flattened: IndexSet<String> = values.iter().flat_map(|value| unpack(value)).collect();
    flattened.into_iter().collect::<Vec<_>>().join(", ")
}

fn unpack(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    if trimmed.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
            return items
                .into_iter()
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
        }
    }

    if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![trimmed.to_string()]
    }
}
