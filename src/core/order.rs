//! Display ordering for an example's source files.

use crate::domain::SourceFile;

/// Source files of one example in display order.
///
/// `main` is the file whose name equals the example slug; `rest`
/// holds every other file in its original relative order. When no
/// file matches, `main` stays empty and `rest` is the whole input --
/// the gap is kept visible instead of silently shortening the list,
/// so callers decide how to render it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedFiles {
    /// The file named after the example, if any
    pub main: Option<SourceFile>,

    /// Remaining files in input order
    pub rest: Vec<SourceFile>,
}

impl OrderedFiles {
    /// Iterate the main file first, then the rest.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.main.iter().chain(self.rest.iter())
    }

    /// Number of present files.
    pub fn len(&self) -> usize {
        usize::from(self.main.is_some()) + self.rest.len()
    }

    /// True when no files are present at all.
    pub fn is_empty(&self) -> bool {
        self.main.is_none() && self.rest.is_empty()
    }
}

/// Sort source files so the file named after the example comes first.
///
/// All files whose name differs from `name` keep their relative
/// order. Duplicate matches collapse to the first one.
pub fn order_files(name: &str, files: &[SourceFile]) -> OrderedFiles {
    let main = files.iter().find(|file| file.name == name).cloned();
    let rest = files
        .iter()
        .filter(|file| file.name != name)
        .cloned()
        .collect();

    OrderedFiles { main, rest }
}
