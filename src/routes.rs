//! Site path construction for example pages.

/// Base path used when no site configuration overrides it.
pub const DEFAULT_BASE_PATH: &str = "/examples";

/// Build the site path for an example page.
///
/// Trailing slashes on `base` are ignored, so `/examples` and
/// `/examples/` produce the same path.
pub fn example_path(base: &str, slug: &str) -> String {
    format!("{}/{}.html", base.trim_end_matches('/'), slug)
}
