use crate::core::record::{Record, RecordDescriptor};

/// First record in listing order whose name, type and content equal the
/// descriptor's. Later duplicates are never considered.
pub fn find<'a>(records: &'a [Record], descriptor: &RecordDescriptor) -> Option<&'a Record> {
    records.iter().find(|record| descriptor.matches(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RecordId;
    use crate::core::record::tests::record;

    #[test]
    fn test_first_duplicate_wins() {
        let records = vec![
            record(7, "a", "TXT", "x"),
            record(8, "a", "TXT", "x"),
        ];
        let found = find(&records, &RecordDescriptor::new("a", "TXT", "x")).unwrap();
        assert_eq!(found.id, Some(RecordId::Numeric(7)));
    }

    #[test]
    fn test_miss_is_none() {
        let records = vec![record(1, "a", "TXT", "x"), record(2, "b", "A", "1.2.3.4")];
        assert!(find(&records, &RecordDescriptor::new("a", "TXT", "y")).is_none());
        assert!(find(&records, &RecordDescriptor::new("b", "AAAA", "1.2.3.4")).is_none());
        assert!(find(&[], &RecordDescriptor::new("a", "TXT", "x")).is_none());
    }

    #[test]
    fn test_matches_apex() {
        let records = vec![record(1, "www", "A", "1.2.3.4"), record(2, "", "A", "1.2.3.4")];
        let found = find(&records, &RecordDescriptor::new("", "A", "1.2.3.4")).unwrap();
        assert_eq!(found.id, Some(RecordId::Numeric(2)));
    }
}
