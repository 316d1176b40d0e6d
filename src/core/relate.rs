//! Curated related-example selection.

use crate::domain::PreparedExample;

/// Select the examples whose slug appears in `related`, keeping the
/// input's relative order.
///
/// Membership is exact, case-sensitive string equality. Duplicate
/// source records that both match are both kept.
pub fn related_examples(
    examples: &[PreparedExample],
    related: &[String],
) -> Vec<PreparedExample> {
    examples
        .iter()
        .filter(|example| related.iter().any(|name| name == &example.slug))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prepare_examples;
    use crate::domain::{ExampleMeta, ExampleRecord};

    fn prepared(names: &[&str]) -> Vec<PreparedExample> {
        let records: Vec<_> = names
            .iter()
            .map(|name| ExampleRecord::new(*name, "Color/Basics", ExampleMeta::new(*name)))
            .collect();
        prepare_examples(&records, None, |slug| format!("/examples/{slug}.html"))
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_keeps_input_order() {
        let examples = prepared(&["A", "B", "C", "D"]);
        let related = names(&["D", "B"]);

        let selected = related_examples(&examples, &related);

        let slugs: Vec<_> = selected.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["B", "D"]);
    }

    #[test]
    fn test_empty_related_list() {
        let examples = prepared(&["A", "B"]);

        assert!(related_examples(&examples, &[]).is_empty());
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let examples = prepared(&["Hue"]);
        let related = names(&["hue"]);

        assert!(related_examples(&examples, &related).is_empty());
    }

    #[test]
    fn test_duplicate_sources_are_both_kept() {
        let mut examples = prepared(&["A", "B"]);
        examples.push(examples[0].clone());
        let related = names(&["A"]);

        let selected = related_examples(&examples, &related);

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let examples = prepared(&["A"]);
        let related = names(&["A", "Missing"]);

        let selected = related_examples(&examples, &related);

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].slug, "A");
    }
}
