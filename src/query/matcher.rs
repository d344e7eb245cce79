//! Partial attribute matching

use crate::store::Attributes;

/// Check whether `record` contains every field of `conditions` with an
/// equal value
///
/// Fields of `record` that `conditions` does not mention are ignored, so an
/// empty `conditions` matches everything.
pub fn dict_contains(record: &Attributes, conditions: &Attributes) -> bool {
    conditions
        .iter()
        .all(|(field, expected)| record.get(field) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    fn record() -> Attributes {
        Attributes::new()
            .with("id", 1)
            .with("name", "a")
            .with("active", true)
    }

    #[test]
    fn test_subset_matches() {
        assert!(dict_contains(&record(), &Attributes::new()));
        assert!(dict_contains(&record(), &Attributes::from([("id", 1)])));
        assert!(dict_contains(
            &record(),
            &Attributes::new().with("active", true).with("name", "a")
        ));
    }

    #[test]
    fn test_missing_field_fails() {
        assert!(!dict_contains(&record(), &Attributes::from([("email", "x")])));
    }

    #[test]
    fn test_value_mismatch_fails() {
        assert!(!dict_contains(&record(), &Attributes::from([("id", 2)])));
        // No coercion between integer and float
        assert!(!dict_contains(&record(), &Attributes::new().with("id", 1.0)));
    }

    #[test]
    fn test_null_requires_explicit_null() {
        let with_null = record().with("deleted_at", Value::Null);
        let cond = Attributes::new().with("deleted_at", Value::Null);

        assert!(dict_contains(&with_null, &cond));
        assert!(!dict_contains(&record(), &cond));
    }
}
