//! Derived View Integration Tests
//!
//! End-to-end checks of the prepare, organize, relate, and order
//! derivations composed the way the site consumes them.

use exhibit::{
    order_files, organize_examples, prepare_examples, related_examples, ExampleMeta,
    ExampleRecord, ImageRecord, SourceFile,
};

fn sample_records() -> Vec<ExampleRecord> {
    vec![
        ExampleRecord::new("A", "Color/Basics", ExampleMeta::new("Example A")),
        ExampleRecord::new(
            "B",
            "Color/Basics",
            ExampleMeta::new("Example B").with_related(["A"]),
        ),
    ]
}

fn path_for(slug: &str) -> String {
    format!("/examples/{slug}.html")
}

#[test]
fn test_prepare_then_organize_scenario() {
    let examples = sample_records();
    let images = vec![ImageRecord::new("A", "/assets/A.png")];

    let prepared = prepare_examples(&examples, Some(images.as_slice()), path_for);

    assert_eq!(prepared.len(), 2);
    assert_eq!(prepared[0].slug, "A");
    assert_eq!(prepared[0].category.as_deref(), Some("Color"));
    assert_eq!(prepared[0].sub_category.as_deref(), Some("Basics"));
    assert_eq!(prepared[0].name, "Example A");
    assert!(prepared[0].image.is_some());
    assert!(prepared[1].image.is_none());

    let tree = organize_examples(&prepared);

    assert_eq!(tree.len(), 1);
    let basics = &tree["Color"]["Basics"];
    let slugs: Vec<_> = basics.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["A", "B"]);
}

#[test]
fn test_related_selection_from_metadata() {
    let examples = sample_records();
    let prepared = prepare_examples(&examples, None, path_for);

    let related = related_examples(&prepared, &examples[1].meta.related);

    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug, "A");
}

#[test]
fn test_order_scenario() {
    let files = vec![
        SourceFile::new("A", "/content/A.pde"),
        SourceFile::new("B", "/content/B.pde"),
        SourceFile::new("C", "/content/C.pde"),
    ];

    let ordered = order_files("B", &files);

    let names: Vec<_> = ordered.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn test_slugs_survive_every_view() {
    let examples = sample_records();
    let prepared = prepare_examples(&examples, None, path_for);

    for (record, item) in examples.iter().zip(&prepared) {
        assert_eq!(record.name, item.slug);
        assert_eq!(item.path, format!("/examples/{}.html", item.slug));
    }

    let tree = organize_examples(&prepared);
    let total: usize = tree
        .values()
        .flat_map(|subs| subs.values())
        .map(|items| items.len())
        .sum();
    assert_eq!(total, prepared.len());
}
