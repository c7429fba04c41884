//! CLI output formatting for all commands.
//!
//! Output is organized by chapter, the way the site itself is: each chapter
//! is a header line with a 1-based positional index, and its page types are
//! indented beneath it with their URL and content status.
//!
//! ## Check
//!
//! ```text
//! Chapters
//! 001 Tall og algebra
//!     001 Teori → /tall-og-algebra/teori/ (built-in)
//!     002 Eksempler → /tall-og-algebra/eksempler/ (tall-og-algebra/eksempler.md)
//!     003 Øving → /tall-og-algebra/ving/ (placeholder)
//!     ...
//!
//! 2 of 56 routes have content
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Tall og algebra
//!     001 Teori → tall-og-algebra/teori/index.html
//!     002 Eksempler → tall-og-algebra/eksempler/index.html (placeholder)
//!     ...
//! Not found → 404.html
//!
//! Assets
//!     favicon.svg
//!
//! Generated 58 pages (1 authored, 55 placeholder), 1 asset
//! ```
//!
//! Each `format_*` function returns lines for testability; the `print_*`
//! wrappers write them to stdout.

use crate::catalog::Catalog;
use crate::content::{ContentRegistry, Source};
use crate::generate::{GeneratedSite, PageKind};
use crate::route::{RequestPath, Route};
use serde::Serialize;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Position of a route's chapter and page type in the catalog, 1-based.
fn route_position(catalog: &Catalog, route: &Route) -> (usize, usize) {
    let chapter = catalog
        .chapters()
        .iter()
        .position(|c| *c == route.chapter)
        .unwrap_or(0);
    let page_type = catalog
        .page_types()
        .iter()
        .position(|pt| *pt == route.page_type)
        .unwrap_or(0);
    (chapter + 1, page_type + 1)
}

fn source_label(source: Option<&Source>, content_root: &Path) -> String {
    match source {
        None => "placeholder".to_string(),
        Some(Source::Builtin) => "built-in".to_string(),
        Some(Source::Markdown(path)) => path
            .strip_prefix(content_root)
            .unwrap_or(path)
            .display()
            .to_string(),
    }
}

// ============================================================================
// check
// ============================================================================

/// Route inventory: every route with its URL and where its content comes from.
pub fn format_check_output(
    catalog: &Catalog,
    content: &ContentRegistry,
    content_root: &Path,
) -> Vec<String> {
    let mut lines = vec!["Chapters".to_string()];
    for (ci, chapter) in catalog.chapters().iter().enumerate() {
        lines.push(format!("{} {}", format_index(ci + 1), chapter));
        for (pi, page_type) in catalog.page_types().iter().enumerate() {
            let route = Route::new(*chapter, *page_type);
            lines.push(format!(
                "{}{} {} → {} ({})",
                indent(1),
                format_index(pi + 1),
                page_type,
                route.path(),
                source_label(content.source(&route), content_root)
            ));
        }
    }
    let authored = catalog
        .routes()
        .filter(|r| content.content(r).is_authored())
        .count();
    lines.push(String::new());
    lines.push(format!(
        "{} of {} routes have content",
        authored,
        catalog.route_count()
    ));
    lines
}

pub fn print_check_output(catalog: &Catalog, content: &ContentRegistry, content_root: &Path) {
    for line in format_check_output(catalog, content, content_root) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

pub fn format_build_output(catalog: &Catalog, site: &GeneratedSite) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_chapter = None;

    for page in &site.pages {
        match page.kind {
            PageKind::Home => lines.push(format!("Home → {}", page.output)),
            PageKind::NotFound => lines.push(format!("Not found → {}", page.output)),
            PageKind::Authored(route) | PageKind::Placeholder(route) => {
                let (chapter_pos, page_type_pos) = route_position(catalog, &route);
                if current_chapter != Some(route.chapter) {
                    lines.push(format!("{} {}", format_index(chapter_pos), route.chapter));
                    current_chapter = Some(route.chapter);
                }
                let marker = match page.kind {
                    PageKind::Placeholder(_) => " (placeholder)",
                    _ => "",
                };
                lines.push(format!(
                    "{}{} {} → {}{}",
                    indent(1),
                    format_index(page_type_pos),
                    route.page_type,
                    page.output,
                    marker
                ));
            }
        }
    }

    if !site.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &site.assets {
            lines.push(format!("{}{}", indent(1), asset));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages ({} authored, {} placeholder), {} {}",
        site.pages.len(),
        site.authored_count(),
        site.placeholder_count(),
        site.assets.len(),
        if site.assets.len() == 1 { "asset" } else { "assets" }
    ));
    lines
}

pub fn print_build_output(catalog: &Catalog, site: &GeneratedSite) {
    for line in format_build_output(catalog, site) {
        println!("{}", line);
    }
}

// ============================================================================
// routes
// ============================================================================

/// One line per route: URL, then display names.
pub fn format_routes(catalog: &Catalog) -> Vec<String> {
    catalog
        .routes()
        .map(|route| format!("{}  {}", route.path(), route.title()))
        .collect()
}

/// Machine-readable form of a route for `routes --json`.
#[derive(Debug, Serialize)]
pub struct RouteListing {
    pub chapter: &'static str,
    pub page_type: &'static str,
    pub path: String,
    pub authored: bool,
}

pub fn route_listings(catalog: &Catalog, content: &ContentRegistry) -> Vec<RouteListing> {
    catalog
        .routes()
        .map(|route| RouteListing {
            chapter: route.chapter.name(),
            page_type: route.page_type.name(),
            path: route.path(),
            authored: content.content(&route).is_authored(),
        })
        .collect()
}

pub fn print_routes(catalog: &Catalog) {
    for line in format_routes(catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// resolve
// ============================================================================

pub fn format_resolution(path: &str, request: &RequestPath) -> Vec<String> {
    match request {
        RequestPath::Home => vec![format!("{} → home", path)],
        RequestPath::Page(route) => vec![
            format!("{} → {}", path, route.title()),
            format!("{}Chapter: {}", indent(1), route.chapter),
            format!("{}Page type: {}", indent(1), route.page_type),
            format!("{}Canonical: {}", indent(1), route.path()),
        ],
        RequestPath::NotFound => vec![format!("{} → not found", path)],
    }
}

pub fn print_resolution(path: &str, request: &RequestPath) {
    for line in format_resolution(path, request) {
        println!("{}", line);
    }
}
