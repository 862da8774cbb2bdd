//! The process-wide bank table, published once
//!
//! The loader is the only writer and sets the table exactly once, after it has been
//! fully built. Request handlers only read, never wait, and either see nothing
//! (still loading) or the complete table.

use crate::core::BankTable;
use std::sync::OnceLock;

/// **Holds the bank table once it's ready**
#[derive(Debug, Default)]
pub struct BankDirectory {
    table: OnceLock<BankTable>,
}

impl BankDirectory {
    /// Returns a directory that isn't ready yet
    pub fn new() -> Self {
        BankDirectory {
            table: OnceLock::new(),
        }
    }

    /// Returns a directory that is ready from the start.
    pub fn with_table(table: BankTable) -> Self {
        let directory = BankDirectory::new();
        directory.publish(table);
        directory
    }

    /// **Publishes the finished table and marks the directory as ready**
    ///
    /// Only the first call has an effect; it returns `false` for any later one.
    pub fn publish(&self, table: BankTable) -> bool {
        match self.table.set(table) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("Bank table was already published; ignoring a second one.");
                false
            }
        }
    }

    /// The table, or `None` while it's still loading
    pub fn table(&self) -> Option<&BankTable> {
        self.table.get()
    }

    pub fn is_ready(&self) -> bool {
        self.table.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BankRecord;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn not_ready_until_published() {
        let directory = BankDirectory::new();
        assert!(!directory.is_ready());
        assert!(directory.table().is_none());

        assert!(directory.publish(BankTable::new()));
        assert!(directory.is_ready());
        assert!(directory.table().unwrap().is_empty());
    }

    #[test]
    fn publishes_only_once() {
        let first = BankTable::from_records(vec![BankRecord::new(
            "021000021",
            "JPMORGAN CHASE",
            "1 Chase Plaza",
            "New York",
            "NY",
        )]);
        let directory = BankDirectory::with_table(first);

        assert!(!directory.publish(BankTable::new()));
        assert_eq!(directory.table().unwrap().len(), 1);
    }

    #[test]
    fn readers_see_the_whole_table() {
        let directory = Arc::new(BankDirectory::new());

        let writer = {
            let directory = Arc::clone(&directory);
            thread::spawn(move || {
                let records = (0..1000).map(|n| {
                    BankRecord::new(&format!("{n:09}"), "BANK", "1 Main St", "Town", "ST")
                });
                directory.publish(records.collect())
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let directory = Arc::clone(&directory);
                thread::spawn(move || {
                    for _ in 0..100 {
                        if let Some(table) = directory.table() {
                            assert_eq!(table.len(), 1000);
                        }
                    }
                })
            })
            .collect();

        assert!(writer.join().unwrap());
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(directory.table().unwrap().len(), 1000);
    }
}
