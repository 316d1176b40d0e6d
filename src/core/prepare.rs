//! Joining example records with cover images and site paths.

use crate::domain::{ExampleRecord, ImageRecord, PreparedExample};

/// Join each example with its cover image, site path, and category
/// split, producing one prepared record per input record in input
/// order.
///
/// The first image whose name equals the example slug wins; passing
/// `images: None` leaves every `image` field empty. `path_for` is the
/// site's path scheme and is invoked exactly once per record.
pub fn prepare_examples<F>(
    examples: &[ExampleRecord],
    images: Option<&[ImageRecord]>,
    path_for: F,
) -> Vec<PreparedExample>
where
    F: Fn(&str) -> String,
{
    examples
        .iter()
        .map(|example| {
            let image = images.and_then(|images| {
                images
                    .iter()
                    .find(|image| image.name == example.name)
                    .cloned()
            });

            let (category, sub_category) = split_directory(&example.relative_directory);

            PreparedExample {
                slug: example.name.clone(),
                path: path_for(&example.name),
                name: example.meta.name.clone(),
                category,
                sub_category,
                image,
            }
        })
        .collect()
}

/// Split a slash-delimited directory into category and sub-category.
///
/// Only the first two segments are meaningful; anything deeper is
/// ignored. An empty directory degrades to no category at all.
fn split_directory(directory: &str) -> (Option<String>, Option<String>) {
    if directory.is_empty() {
        return (None, None);
    }

    let mut segments = directory.split('/');
    let category = segments.next().map(str::to_string);
    let sub_category = segments.next().map(str::to_string);

    (category, sub_category)
}
