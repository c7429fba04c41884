//! # Kompendium
//!
//! Static site generator for *Matematikk 1T – Kompendium*: 14 chapters, each
//! with four sub-pages (Teori, Eksempler, Øving, Eksamensoppgaver), addressed
//! by URL slugs derived from their Norwegian names.
//!
//! # Request Flow
//!
//! ```text
//! /tall-og-algebra/teori/
//!     │
//!     ├─ route::parse_path     two segments → route::resolve against the Catalog
//!     │                        (slugs from slug::normalize)
//!     ├─ ContentRegistry       route → authored block, or placeholder
//!     └─ shell::Site           header + back button + heading + block
//!                              (or the not-found message)
//! ```
//!
//! `kompendium build` runs this flow for `/`, every catalog route and the
//! not-found page, and writes the results as static HTML.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Display name → URL slug normalization |
//! | [`catalog`] | The fixed chapter and page-type lists; slug uniqueness check |
//! | [`route`] | Slug segments → route, URL path → home / page / not found |
//! | [`content`] | Content registry: built-in primer, Markdown files, placeholders |
//! | [`reveal`] | Show/hide state and markup for answer blocks |
//! | [`shell`] | Page chrome and page renderers (Maud) |
//! | [`generate`] | Writes the rendered site to disk |
//! | [`config`] | `config.toml` loading, merging, validation and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Static Output
//!
//! Every valid route is known ahead of time (the catalog is compiled in), so
//! the site is pre-rendered rather than routed in the browser. Unknown paths
//! fall through to `404.html`, which carries the same not-found message the
//! resolver produces for `kompendium resolve`.
//!
//! ## Slugs Are Derived, Never Stored
//!
//! A slug is recomputed from the display name whenever it is needed. The
//! normalization reproduces the published URLs exactly, including the
//! non-obvious cases: `Øving` → `ving`, because `ø` has no canonical
//! decomposition and is treated as a separator.
//!
//! ## Explicit Content Registry
//!
//! Content is looked up in a map keyed by route, defaulting to a
//! placeholder. Adding a page is adding an entry (or a Markdown file), not a
//! new branch in the renderer.

pub mod catalog;
pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod reveal;
pub mod route;
pub mod shell;
pub mod slug;

#[cfg(test)]
pub(crate) mod test_helpers;
