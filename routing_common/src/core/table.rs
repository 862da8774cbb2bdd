use crate::core::types::BankRecord;
use std::collections::HashMap;

/// **An immutable lookup table of banks, keyed by routing number**
///
/// Built once, in source order. When a routing number appears more than once,
/// the first row wins, exactly as a front-to-back scan would find it.
#[derive(Debug, Default)]
pub struct BankTable {
    banks: HashMap<String, BankRecord>,
    rows: usize,
}

impl BankTable {
    /// Returns an empty table, used as the fallback when loading fails
    pub fn new() -> Self {
        BankTable {
            banks: HashMap::new(),
            rows: 0,
        }
    }

    /// Builds a table from records given in source order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BankRecord>,
    {
        let mut table = BankTable::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Keeps the first record seen for a routing number; later duplicates only count as rows.
    fn insert(&mut self, record: BankRecord) {
        self.rows += 1;
        self.banks
            .entry(record.routing_number.clone())
            .or_insert(record);
    }

    /// Exact-match lookup; no trimming, no leading-zero normalization.
    pub fn lookup(&self, routing_number: &str) -> Option<&BankRecord> {
        self.banks.get(routing_number)
    }

    /// Number of distinct routing numbers in the table
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Number of accepted source rows, duplicates included
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

impl FromIterator<BankRecord> for BankTable {
    fn from_iter<T: IntoIterator<Item = BankRecord>>(iter: T) -> Self {
        BankTable::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chase() -> BankRecord {
        BankRecord::new(
            "021000021",
            "JPMORGAN CHASE",
            "1 Chase Plaza",
            "New York",
            "NY",
        )
    }

    #[test]
    fn lookup_finds_exact_match() {
        let table = BankTable::from_records(vec![chase()]);
        assert_eq!(table.lookup("021000021"), Some(&chase()));
    }

    #[test]
    fn lookup_does_not_strip_leading_zeros() {
        let table = BankTable::from_records(vec![chase()]);
        assert!(table.lookup("21000021").is_none());
        assert!(table.lookup(" 021000021").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let later = BankRecord::new("021000021", "SOMEONE ELSE", "2 Main St", "Albany", "NY");
        let table: BankTable = vec![chase(), later].into_iter().collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.lookup("021000021").unwrap().bank_name, "JPMORGAN CHASE");
    }

    #[test]
    fn empty_table_finds_nothing() {
        let table = BankTable::new();
        assert!(table.is_empty());
        assert!(table.lookup("021000021").is_none());
    }
}
