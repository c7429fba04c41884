//! The fixed list of chapters and page types.
//!
//! The catalog is the single source of truth for which routes exist. It is
//! compiled-in data: there is no way to add, rename, or remove an entry at
//! runtime. Display order is catalog order, both for chapter cards on the home
//! page and for the page-type links inside each card.
//!
//! ## Slug Uniqueness
//!
//! Routes are addressed by slug, so two entries of the same kind that
//! normalize to the same slug would make the second one unreachable.
//! [`Catalog::new`] rejects such a catalog up front instead of letting the
//! resolver silently shadow an entry.

use crate::route::Route;
use crate::slug;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Chapter titles in display order.
pub const CHAPTER_NAMES: [&str; 14] = [
    "Tall og algebra",
    "Likninger og ulikheter",
    "Polynomdivisjon",
    "Funksjoner og grafer",
    "Andregradsfunksjoner",
    "Asymptoter",
    "Grunnleggende trigonometri",
    "Trigonometri i praksis",
    "Derivasjon og vekstfart",
    "Modellering og anvendelse",
    "Geometri og areal/volum",
    "Sannsynlighet og kombinatorikk",
    "Figurtall og tallmønstre",
    "Programmering og algoritmisk tenkning",
];

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("{kind} '{second}' has the same slug '{slug}' as '{first}'")]
    DuplicateSlug {
        kind: &'static str,
        slug: String,
        first: String,
        second: String,
    },
    #[error("{kind} '{name}' has no alphanumeric content and cannot be routed")]
    EmptySlug { kind: &'static str, name: String },
}

/// A course chapter. Identity is the exact display name.
///
/// Only a [`Catalog`] hands these out, so every `Chapter` in the program is
/// a member of some validated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chapter {
    name: &'static str,
}

impl Chapter {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// URL segment for this chapter, derived on every call.
    pub fn slug(&self) -> String {
        slug::normalize(self.name)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The four kinds of sub-page every chapter has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Theory,
    Examples,
    Exercises,
    ExamTasks,
}

impl PageType {
    /// All page types in display order.
    pub const ALL: [PageType; 4] = [
        PageType::Theory,
        PageType::Examples,
        PageType::Exercises,
        PageType::ExamTasks,
    ];

    /// Norwegian display name, as shown in menus and headings.
    pub fn name(self) -> &'static str {
        match self {
            PageType::Theory => "Teori",
            PageType::Examples => "Eksempler",
            PageType::Exercises => "Øving",
            PageType::ExamTasks => "Eksamensoppgaver",
        }
    }

    pub fn slug(self) -> String {
        slug::normalize(self.name())
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, immutable collection of chapters and page types.
#[derive(Debug, Clone)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    page_types: Vec<PageType>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(&CHAPTER_NAMES, &PageType::ALL).expect("built-in catalog must have unique slugs")
});

impl Catalog {
    /// Build a catalog, rejecting entries that could never be routed to.
    pub fn new(
        chapter_names: &[&'static str],
        page_types: &[PageType],
    ) -> Result<Self, CatalogError> {
        check_slugs("chapter", chapter_names.iter().copied())?;
        check_slugs("page type", page_types.iter().map(|pt| pt.name()))?;
        Ok(Self {
            chapters: chapter_names
                .iter()
                .map(|&name| Chapter { name })
                .collect(),
            page_types: page_types.to_vec(),
        })
    }

    /// The compendium's catalog: 14 chapters × 4 page types.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn page_types(&self) -> &[PageType] {
        &self.page_types
    }

    /// Look up a chapter by its exact display name.
    pub fn chapter(&self, name: &str) -> Option<Chapter> {
        self.chapters.iter().copied().find(|c| c.name == name)
    }

    /// Every route, chapter-major, in display order.
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.chapters.iter().flat_map(move |&chapter| {
            self.page_types
                .iter()
                .map(move |&page_type| Route::new(chapter, page_type))
        })
    }

    /// Number of routes in the cross-product.
    pub fn route_count(&self) -> usize {
        self.chapters.len() * self.page_types.len()
    }
}

fn check_slugs<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let slug = slug::normalize(name);
        if slug.is_empty() {
            return Err(CatalogError::EmptySlug {
                kind,
                name: name.to_string(),
            });
        }
        if let Some(first) = seen.get(&slug) {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        seen.insert(slug, name);
    }
    Ok(())
}
