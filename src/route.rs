//! Route resolution: URL slugs → (chapter, page type).
//!
//! The site has exactly two kinds of address:
//!
//! ```text
//! /                                  → home
//! /{chapter-slug}/{page-type-slug}/  → one chapter sub-page
//! ```
//!
//! Incoming segments are compared verbatim against the normalized catalog
//! names; they are not normalized themselves, so `/Tall-og-algebra/teori`
//! does not resolve. Failure is an ordinary outcome, not an error, and no
//! distinction is made between an unknown chapter and an unknown page type.

use crate::catalog::{Catalog, Chapter, PageType};

/// A (chapter, page type) pair addressed by two URL segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub chapter: Chapter,
    pub page_type: PageType,
}

impl Route {
    pub fn new(chapter: Chapter, page_type: PageType) -> Self {
        Self { chapter, page_type }
    }

    /// Canonical URL, e.g. `/tall-og-algebra/teori/`.
    pub fn path(&self) -> String {
        format!("/{}/{}/", self.chapter.slug(), self.page_type.slug())
    }

    /// Generated file relative to the output root.
    pub fn output_path(&self) -> String {
        format!("{}/{}/index.html", self.chapter.slug(), self.page_type.slug())
    }

    /// Page heading, e.g. `Tall og algebra – Teori`.
    pub fn title(&self) -> String {
        format!("{} – {}", self.chapter, self.page_type)
    }
}

/// What a full URL path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPath {
    Home,
    Page(Route),
    NotFound,
}

/// Find the route addressed by two slug segments.
///
/// First match wins for each segment. Returns `None` unless both match.
pub fn resolve(catalog: &Catalog, chapter_slug: &str, page_type_slug: &str) -> Option<Route> {
    let chapter = catalog
        .chapters()
        .iter()
        .copied()
        .find(|c| c.slug() == chapter_slug)?;
    let page_type = catalog
        .page_types()
        .iter()
        .copied()
        .find(|pt| pt.slug() == page_type_slug)?;
    Some(Route::new(chapter, page_type))
}

/// Classify a URL path.
///
/// Accepts the forms a static host hands out for the same page:
/// `/a/b`, `/a/b/` and `/a/b/index.html`. A query string or fragment is
/// ignored.
pub fn parse_path(catalog: &Catalog, path: &str) -> RequestPath {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if path.ends_with("/index.html") || path == "index.html" {
        segments.pop();
    }

    match segments.as_slice() {
        [] => RequestPath::Home,
        [chapter_slug, page_type_slug] => resolve(catalog, chapter_slug, page_type_slug)
            .map(RequestPath::Page)
            .unwrap_or(RequestPath::NotFound),
        _ => RequestPath::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::normalize;

    fn tall_og_algebra(page_type: PageType) -> Route {
        let catalog = Catalog::builtin();
        Route::new(catalog.chapter("Tall og algebra").unwrap(), page_type)
    }

    #[test]
    fn every_catalog_pair_resolves_from_its_slugs() {
        let catalog = Catalog::builtin();
        let mut count = 0;
        for chapter in catalog.chapters() {
            for page_type in catalog.page_types() {
                let resolved = resolve(
                    catalog,
                    &normalize(chapter.name()),
                    &normalize(page_type.name()),
                );
                assert_eq!(resolved, Some(Route::new(*chapter, *page_type)));
                count += 1;
            }
        }
        assert_eq!(count, 56);
    }

    #[test]
    fn unknown_chapter_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(catalog, "does-not-exist", &normalize("Teori")), None);
    }

    #[test]
    fn unknown_page_type_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(catalog, &normalize("Tall og algebra"), "bogus"), None);
    }

    #[test]
    fn segments_are_not_normalized() {
        let catalog = Catalog::builtin();
        assert_eq!(resolve(catalog, "Tall-og-algebra", "teori"), None);
        assert_eq!(resolve(catalog, "tall-og-algebra", "øving"), None);
        assert!(resolve(catalog, "tall-og-algebra", "ving").is_some());
    }

    #[test]
    fn route_paths() {
        let route = tall_og_algebra(PageType::Theory);
        assert_eq!(route.path(), "/tall-og-algebra/teori/");
        assert_eq!(route.output_path(), "tall-og-algebra/teori/index.html");
        assert_eq!(route.title(), "Tall og algebra – Teori");
    }

    #[test]
    fn parse_home() {
        let catalog = Catalog::builtin();
        assert_eq!(parse_path(catalog, "/"), RequestPath::Home);
        assert_eq!(parse_path(catalog, ""), RequestPath::Home);
        assert_eq!(parse_path(catalog, "/index.html"), RequestPath::Home);
    }

    #[test]
    fn parse_route_variants() {
        let catalog = Catalog::builtin();
        let expected = RequestPath::Page(tall_og_algebra(PageType::Theory));
        for path in [
            "/tall-og-algebra/teori",
            "/tall-og-algebra/teori/",
            "/tall-og-algebra/teori/index.html",
            "tall-og-algebra/teori",
            "/tall-og-algebra/teori?x=1",
            "/tall-og-algebra/teori#top",
        ] {
            assert_eq!(parse_path(catalog, path), expected, "{path}");
        }
    }

    #[test]
    fn parse_unknown_shapes() {
        let catalog = Catalog::builtin();
        assert_eq!(
            parse_path(catalog, "/ukjent-kapittel/teori"),
            RequestPath::NotFound
        );
        assert_eq!(parse_path(catalog, "/tall-og-algebra"), RequestPath::NotFound);
        assert_eq!(
            parse_path(catalog, "/tall-og-algebra/teori/extra"),
            RequestPath::NotFound
        );
        assert_eq!(
            parse_path(catalog, "/tall-og-algebra/teoriindex.html"),
            RequestPath::NotFound
        );
        assert_eq!(
            parse_path(catalog, "/tall-og-algebra/index.html"),
            RequestPath::NotFound
        );
    }
}
