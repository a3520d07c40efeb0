//! Record filtering.
//!
//! # Responsibilities
//! - Test a single field of a record for strict equality
//! - Combine conditions with AND semantics
//! - Scan a collection once, keeping seed order
//!
//! # Design Decisions
//! - Empty conjunction = always matches (wildcard)
//! - Field extraction via plain `fn` pointers, so filters hold no borrows
//! - No sorting or deduplication; output order is input order

/// Trait for testing records against a condition.
pub trait RecordFilter<T>: Send + Sync {
    /// Returns true if the record satisfies this condition.
    fn matches(&self, record: &T) -> bool;

    /// Names of the fields this condition inspects.
    fn fields(&self) -> Vec<&'static str>;
}

/// Matches records whose extracted field equals `expected`.
pub struct FieldEquals<T, V> {
    field: &'static str,
    expected: V,
    extract: fn(&T) -> V,
}

impl<T, V> FieldEquals<T, V> {
    pub fn new(field: &'static str, expected: V, extract: fn(&T) -> V) -> Self {
        Self {
            field,
            expected,
            extract,
        }
    }
}

impl<T, V> RecordFilter<T> for FieldEquals<T, V>
where
    V: PartialEq + Send + Sync,
{
    fn matches(&self, record: &T) -> bool {
        (self.extract)(record) == self.expected
    }

    fn fields(&self) -> Vec<&'static str> {
        vec![self.field]
    }
}

/// Combines filters with AND semantics.
pub struct AllOf<T> {
    filters: Vec<Box<dyn RecordFilter<T>>>,
}

impl<T> AllOf<T> {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn push(&mut self, filter: impl RecordFilter<T> + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Adds an equality condition only when a value was supplied.
    pub fn push_eq<V>(&mut self, field: &'static str, expected: Option<V>, extract: fn(&T) -> V)
    where
        T: 'static,
        V: PartialEq + Send + Sync + 'static,
    {
        if let Some(expected) = expected {
            self.push(FieldEquals::new(field, expected, extract));
        }
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordFilter<T> for AllOf<T> {
    fn matches(&self, record: &T) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    fn fields(&self) -> Vec<&'static str> {
        self.filters.iter().flat_map(|f| f.fields()).collect()
    }
}

/// Single linear pass over `records`, keeping those that match.
pub fn scan<'a, T>(records: &'a [T], filter: &dyn RecordFilter<T>) -> Vec<&'a T> {
    let hits: Vec<&T> = records.iter().filter(|r| filter.matches(r)).collect();
    tracing::debug!(
        filters = ?filter.fields(),
        scanned = records.len(),
        matched = hits.len(),
        "Collection scanned"
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        id: u32,
        colour: &'static str,
        size: u8,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, colour: "red", size: 1 },
            Row { id: 2, colour: "blue", size: 2 },
            Row { id: 3, colour: "red", size: 2 },
            Row { id: 4, colour: "Red", size: 2 },
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_field_equals() {
        let filter = FieldEquals::new("colour", "red", |r: &Row| r.colour);
        assert_eq!(filter.fields(), ["colour"]);
        assert!(filter.matches(&Row { id: 0, colour: "red", size: 0 }));
        assert!(!filter.matches(&Row { id: 0, colour: "Red", size: 0 })); // Case sensitive
    }

    #[test]
    fn test_empty_conjunction_matches_everything() {
        let data = rows();
        let filter: AllOf<Row> = AllOf::new();
        assert!(filter.fields().is_empty());
        assert_eq!(scan(&data, &filter).len(), data.len());
    }

    #[test]
    fn test_conjunction_preserves_order() {
        let data = rows();
        let mut filter: AllOf<Row> = AllOf::new();
        filter.push_eq("colour", Some("red"), |r: &Row| r.colour);
        filter.push_eq("size", Some(2), |r: &Row| r.size);
        assert_eq!(filter.fields(), ["colour", "size"]);
        assert_eq!(ids(&scan(&data, &filter)), vec![3]);

        let mut colour_only: AllOf<Row> = AllOf::new();
        colour_only.push_eq("colour", Some("red"), |r: &Row| r.colour);
        colour_only.push_eq::<u8>("size", None, |r: &Row| r.size);
        assert_eq!(colour_only.fields(), ["colour"]);
        assert_eq!(ids(&scan(&data, &colour_only)), vec![1, 3]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let data = rows();
        let mut filter: AllOf<Row> = AllOf::new();
        filter.push_eq("colour", Some("green"), |r: &Row| r.colour);
        assert!(scan(&data, &filter).is_empty());
    }
}
