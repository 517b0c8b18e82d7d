//! URL resolver
//!
//! Assigns each record `prefix + directory name` for the directory whose
//! two-digit prefix equals the record id. When several directories share a
//! prefix the last one in listing order wins.

use tracing::{debug, warn};

use crate::core::model::{DirectoryEntry, Record};

/// Resolve urls in place, returning how many records got one
pub fn resolve_urls(records: &mut [Record], dirs: &[DirectoryEntry], url_prefix: &str) -> usize {
    let mut resolved = 0;

    for record in records.iter_mut() {
        record.url.clear();

        let matches: Vec<&DirectoryEntry> =
            dirs.iter().filter(|dir| dir.prefix == record.id).collect();
        let Some((chosen, skipped)) = matches.split_last() else {
            debug!(id = record.id, "no directory for record");
            continue;
        };

        if !skipped.is_empty() {
            let skipped: Vec<&str> = skipped.iter().map(|dir| dir.name.as_str()).collect();
            warn!(
                id = record.id,
                used = %chosen.name,
                skipped = %skipped.join(", "),
                "{} directories share an id prefix",
                matches.len()
            );
        }

        record.url = format!("{}{}", url_prefix, chosen.name);
        resolved += 1;
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://example.com/";

    fn dir(prefix: u32, name: &str) -> DirectoryEntry {
        DirectoryEntry {
            prefix,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_resolves_matching_record() {
        let mut records = vec![Record::new(1, "A. Smith", "Tree")];
        let count = resolve_urls(&mut records, &[dir(1, "01-tree-book")], PREFIX);

        assert_eq!(count, 1);
        assert_eq!(records[0].url, "https://example.com/01-tree-book");
    }

    #[test]
    fn test_unmatched_record_stays_empty() {
        let mut records = vec![Record::new(2, "Bee", "Hive")];
        let count = resolve_urls(&mut records, &[dir(1, "01-tree-book")], PREFIX);

        assert_eq!(count, 0);
        assert!(records[0].url.is_empty());
    }

    #[test]
    fn test_last_matching_directory_wins() {
        let mut records = vec![Record::new(4, "D", "Four")];
        resolve_urls(&mut records, &[dir(4, "04-a"), dir(4, "04-b")], PREFIX);

        assert_eq!(records[0].url, "https://example.com/04-b");
    }

    #[test]
    fn test_last_of_three_sharing_prefix_wins() {
        let mut records = vec![Record::new(4, "D", "Four")];
        let dirs = [dir(4, "04-a"), dir(4, "04-b"), dir(4, "04-c")];
        let count = resolve_urls(&mut records, &dirs, PREFIX);

        assert_eq!(count, 1);
        assert_eq!(records[0].url, "https://example.com/04-c");
    }

    #[test]
    fn test_duplicate_ids_resolve_independently() {
        let mut records = vec![Record::new(3, "C", "One"), Record::new(3, "C", "Two")];
        let count = resolve_urls(&mut records, &[dir(3, "03-x")], PREFIX);

        assert_eq!(count, 2);
        assert_eq!(records[0].url, records[1].url);
    }

    #[test]
    fn test_stale_url_is_recomputed() {
        let mut record = Record::new(9, "I", "Nine");
        record.url = "https://old.example/".to_string();
        let mut records = vec![record];

        resolve_urls(&mut records, &[], PREFIX);
        assert!(records[0].url.is_empty());
    }

    #[test]
    fn test_large_id_never_matches() {
        let mut records = vec![Record::new(101, "X", "Big")];
        let count = resolve_urls(&mut records, &[dir(1, "01-a"), dir(10, "10-b")], PREFIX);
        assert_eq!(count, 0);
    }
}
