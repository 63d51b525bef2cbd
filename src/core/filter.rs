use crate::models::Entry;

/// Keep the entries that are not yet completed ("Nein"), preserving order.
pub fn open_entries(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(|e| !e.completed).collect()
}
