use std::collections::HashSet;

/// Removes repeated values, keeping each value at the position of its first occurrence.
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let result = dedup_preserving_order(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(result, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedup_is_exact_match() {
        // Case and surrounding whitespace make values distinct
        let result = dedup_preserving_order(strings(&["About", "about", "about "]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_dedup_empty_and_idempotent() {
        assert!(dedup_preserving_order(Vec::new()).is_empty());

        let once = dedup_preserving_order(strings(&["x", "y", "x", "z", "y"]));
        let twice = dedup_preserving_order(once.clone());
        assert_eq!(once, twice);
    }
}
