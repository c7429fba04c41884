//! Content lookup for resolved routes.
//!
//! Content is an explicit registry keyed by [`Route`]. A route with no entry
//! gets a placeholder naming its chapter and page type, so lookup is total
//! over the catalog. The registry is filled from two sources, in order:
//!
//! 1. **Built-in blocks** compiled into the binary (the algebra primer for
//!    *Tall og algebra – Teori*).
//! 2. **Markdown files** in the content directory, one per route:
//!
//! ```text
//! content/
//! ├── config.toml
//! ├── assets/                       # copied verbatim, not content
//! └── tall-og-algebra/
//!     ├── teori.md                  # overrides the built-in primer
//!     └── eksempler.md
//! ```
//!
//! Directory and file names are route slugs. A Markdown file that does not
//! name a route is an error rather than being silently skipped.
//!
//! ## Answer Blocks
//!
//! A fenced block with the info string `fasit` becomes a [`RevealToggle`]
//! whose body is the block's contents rendered as Markdown:
//!
//! ````markdown
//! Løs likningen 2x + 3 = 11.
//!
//! ```fasit
//! **x = 4**
//! ```
//! ````

use crate::catalog::{Catalog, PageType};
use crate::reveal::RevealToggle;
use crate::route::{self, Route};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Parser, Tag, TagEnd, html as md_html};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{path} does not match any chapter/page type (expected <chapter-slug>/<page-type-slug>.md)")]
    UnknownRoute { path: PathBuf },
}

/// What the shell shows for a route.
#[derive(Debug, Clone)]
pub enum ContentBlock {
    /// Authored markup.
    Authored(Markup),
    /// No content written yet.
    Placeholder(Route),
}

impl ContentBlock {
    pub fn is_authored(&self) -> bool {
        matches!(self, ContentBlock::Authored(_))
    }

    pub fn render(&self) -> Markup {
        match self {
            ContentBlock::Authored(markup) => html! {
                div.content { (markup) }
            },
            ContentBlock::Placeholder(route) => html! {
                p.placeholder { (placeholder_text(route)) }
            },
        }
    }
}

/// `Innhold for "Eksempler" i "Tall og algebra" kommer her.`
pub fn placeholder_text(route: &Route) -> String {
    format!(
        "Innhold for \"{}\" i \"{}\" kommer her.",
        route.page_type, route.chapter
    )
}

/// Where a registered block came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Builtin,
    Markdown(PathBuf),
}

#[derive(Debug, Clone)]
struct Entry {
    markup: Markup,
    source: Source,
}

/// Authored content keyed by route.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    entries: HashMap<Route, Entry>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the compiled-in blocks that exist in `catalog`.
    pub fn builtin(catalog: &Catalog) -> Self {
        let mut registry = Self::new();
        if let Some(chapter) = catalog.chapter("Tall og algebra") {
            registry.register(
                Route::new(chapter, PageType::Theory),
                algebra_primer(),
                Source::Builtin,
            );
        }
        registry
    }

    /// Built-in blocks plus every Markdown file under `content_root`.
    pub fn load(catalog: &Catalog, content_root: &Path) -> Result<Self, ContentError> {
        let mut registry = Self::builtin(catalog);
        registry.load_markdown(catalog, content_root)?;
        Ok(registry)
    }

    /// Register `markup` for `route`, replacing any earlier entry.
    pub fn register(&mut self, route: Route, markup: Markup, source: Source) {
        if let Some(previous) = self.entries.get(&route) {
            tracing::info!(
                route = %route.path(),
                previous = ?previous.source,
                new = ?source,
                "overriding content"
            );
        }
        self.entries.insert(route, Entry { markup, source });
    }

    /// The block to show for `route`. Never fails.
    pub fn content(&self, route: &Route) -> ContentBlock {
        match self.entries.get(route) {
            Some(entry) => ContentBlock::Authored(entry.markup.clone()),
            None => ContentBlock::Placeholder(*route),
        }
    }

    pub fn source(&self, route: &Route) -> Option<&Source> {
        self.entries.get(route).map(|e| &e.source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `<chapter-slug>/<page-type-slug>.md` files under `root`.
    ///
    /// Returns the number of files loaded. A missing `root` loads nothing.
    /// `assets/` and hidden directories are skipped.
    pub fn load_markdown(&mut self, catalog: &Catalog, root: &Path) -> Result<usize, ContentError> {
        if !root.is_dir() {
            tracing::debug!(root = %root.display(), "no content directory");
            return Ok(0);
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !(e.depth() == 1 && e.file_type().is_dir() && (name == "assets" || name.starts_with('.')))
            });

        let mut loaded = 0;
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if !is_markdown(path) {
                if entry.depth() > 1 {
                    tracing::warn!(file = %path.display(), "ignoring non-markdown file");
                }
                continue;
            }
            let route = route_for_file(catalog, root, path)
                .ok_or_else(|| ContentError::UnknownRoute {
                    path: path.to_path_buf(),
                })?;
            let body = fs::read_to_string(path)?;
            tracing::debug!(file = %path.display(), route = %route.path(), "loaded markdown");
            self.register(route, render_markdown(&body), Source::Markdown(path.to_path_buf()));
            loaded += 1;
        }
        Ok(loaded)
    }
}

/// `.md` in any letter case.
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Map `root/<chapter-slug>/<page-type-slug>.md` to its route.
fn route_for_file(catalog: &Catalog, root: &Path, path: &Path) -> Option<Route> {
    let relative = path.strip_prefix(root).ok()?;
    let mut components = relative.components();
    let chapter_slug = components.next()?.as_os_str().to_str()?;
    let file = components.next()?.as_os_str();
    if components.next().is_some() {
        return None;
    }
    let page_type_slug = Path::new(file).file_stem()?.to_str()?;
    route::resolve(catalog, chapter_slug, page_type_slug)
}

/// Render Markdown, turning ```` ```fasit ```` blocks into reveal toggles.
pub fn render_markdown(source: &str) -> Markup {
    let mut events = Vec::new();
    let mut answer: Option<String> = None;

    for event in Parser::new(source) {
        if let Some(body) = answer.as_mut() {
            match event {
                Event::Text(text) => body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let toggle = RevealToggle::new().render(render_markdown(body));
                    events.push(Event::Html(CowStr::from(toggle.into_string())));
                    answer = None;
                }
                _ => {}
            }
            continue;
        }
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info))) if info.trim() == "fasit" => {
                answer = Some(String::new());
            }
            event => events.push(event),
        }
    }

    let mut out = String::new();
    md_html::push_html(&mut out, events.into_iter());
    PreEscaped(out)
}

/// Worked-example primer for *Tall og algebra – Teori*.
fn algebra_primer() -> Markup {
    html! {
        p {
            strong { "Algebra" }
            " er matematikkens språk for det ukjente. I stedet for å jobbe med tall vi vet, \
             jobber vi med symboler (variabler) for å finne ut hva tallene må være."
        }

        h2 { "Hva er en variabel?" }
        p {
            "En variabel er en bokstav som representerer et ukjent tall. For eksempel: \
             hvis du tjener 200 kr per time, og jobber "
            code { "x" }
            " timer, er lønnen din "
            code { "200x" }
            "."
        }

        h2 { "Å samle like ledd" }
        p {
            "Du kan legge sammen ledd som har samme variabel: "
            code { "3x + 5x = 8x" }
        }

        h2 { "Å gange ut parenteser" }
        p {
            "Distribuer tallet utenfor parentesen til alle inni: "
            code { "2(x + 4) = 2x + 8" }
        }

        h2 { "Hva er en likning?" }
        p {
            "En likning sier at to uttrykk er like. Vi løser likningen ved å finne hvilken \
             verdi av variabelen som gjør at det stemmer."
        }
        p { "Eksempel: " code { "2x + 3 = 11 → x = 4" } }

        h2 { "Likninger med brøker" }
        p {
            "Du kan fjerne brøkene ved å multiplisere med fellesnevner: "
            code { "x/2 + x/3 = 10 → 3x + 2x = 60 → x = 12" }
        }

        h2 { "Formelomforming" }
        p {
            "Noen ganger kjenner vi alle tallene bortsett fra én. Da kan vi omforme \
             formelen for å isolere den ukjente."
        }
        p { "Eksempel: " code { "A = l · b → b = A / l" } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn primer_for_tall_og_algebra_teori() {
        let catalog = Catalog::builtin();
        let registry = ContentRegistry::builtin(catalog);
        let block = registry.content(&route(catalog, "Tall og algebra", PageType::Theory));

        assert!(block.is_authored());
        let html = block.render().into_string();
        assert!(html.contains("<strong>Algebra</strong>"));
        for heading in [
            "Hva er en variabel?",
            "Å samle like ledd",
            "Å gange ut parenteser",
            "Hva er en likning?",
            "Likninger med brøker",
            "Formelomforming",
        ] {
            assert!(html.contains(&format!("<h2>{heading}</h2>")), "{heading}");
        }
        assert!(html.contains("<code>2x + 3 = 11 → x = 4</code>"));
    }

    #[test]
    fn other_page_types_get_placeholder() {
        let catalog = Catalog::builtin();
        let registry = ContentRegistry::builtin(catalog);
        let block = registry.content(&route(catalog, "Tall og algebra", PageType::Examples));

        assert!(!block.is_authored());
        let html = block.render().into_string();
        assert!(html.contains("Eksempler"));
        assert!(html.contains("Tall og algebra"));
        assert!(html.contains("kommer her."));
    }

    #[test]
    fn content_is_total_over_catalog() {
        let catalog = Catalog::builtin();
        let registry = ContentRegistry::builtin(catalog);
        let authored = catalog
            .routes()
            .filter(|r| registry.content(r).is_authored())
            .count();
        assert_eq!(authored, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn placeholder_wording() {
        let catalog = Catalog::builtin();
        let r = route(catalog, "Asymptoter", PageType::Exercises);
        assert_eq!(placeholder_text(&r), "Innhold for \"Øving\" i \"Asymptoter\" kommer her.");
    }

    #[test]
    fn markdown_files_register_routes() {
        let tmp = setup_fixtures();
        let catalog = Catalog::builtin();
        let registry = ContentRegistry::load(catalog, tmp.path()).unwrap();

        let examples = route(catalog, "Tall og algebra", PageType::Examples);
        assert!(registry.content(&examples).is_authored());
        assert!(matches!(registry.source(&examples), Some(Source::Markdown(_))));

        let html = registry.content(&examples).render().into_string();
        assert!(html.contains("<h2>Eksempel 1</h2>"));
        assert!(html.contains("Vis fasit"));
    }

    #[test]
    fn markdown_overrides_builtin() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "tall-og-algebra/teori.md", "# Ny teori\n");
        let catalog = Catalog::builtin();
        let registry = ContentRegistry::load(catalog, tmp.path()).unwrap();

        let theory = route(catalog, "Tall og algebra", PageType::Theory);
        let html = registry.content(&theory).render().into_string();
        assert!(html.contains("<h1>Ny teori</h1>"));
        assert!(!html.contains("Formelomforming"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_route_file_is_error() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "ukjent-kapittel/teori.md", "x");
        let result = ContentRegistry::load(Catalog::builtin(), tmp.path());
        assert!(matches!(result, Err(ContentError::UnknownRoute { .. })));
    }

    #[test]
    fn top_level_markdown_is_error() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "teori.md", "x");
        let result = ContentRegistry::load(Catalog::builtin(), tmp.path());
        assert!(matches!(result, Err(ContentError::UnknownRoute { .. })));
    }

    #[test]
    fn assets_and_non_markdown_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "assets/notes.md", "not content");
        write_file(tmp.path(), "config.toml", "");
        write_file(tmp.path(), "asymptoter/notes.txt", "ignored");
        let mut registry = ContentRegistry::new();
        let loaded = registry.load_markdown(Catalog::builtin(), tmp.path()).unwrap();
        assert_eq!(loaded, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn markdown_extension_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "asymptoter/teori.MD", "# Asymptoter\n");
        write_file(tmp.path(), "asymptoter/eksempler.markdown", "# Ignored\n");
        let catalog = Catalog::builtin();
        let mut registry = ContentRegistry::new();

        let loaded = registry.load_markdown(catalog, tmp.path()).unwrap();

        assert_eq!(loaded, 1);
        let theory = route(catalog, "Asymptoter", PageType::Theory);
        assert!(registry.content(&theory).is_authored());
        let examples = route(catalog, "Asymptoter", PageType::Examples);
        assert!(!registry.content(&examples).is_authored());
    }

    #[test]
    fn missing_root_loads_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut registry = ContentRegistry::new();
        let loaded = registry
            .load_markdown(Catalog::builtin(), &tmp.path().join("missing"))
            .unwrap();
        assert_eq!(loaded, 0);
    }

    #[test]
    fn fasit_block_becomes_hidden_toggle() {
        let html = render_markdown("Løs 2x = 8.\n\n```fasit\n**x = 4**\n```\n").into_string();
        assert!(html.contains("<p>Løs 2x = 8.</p>"));
        assert!(html.contains(">Vis fasit</button>"));
        assert!(html.contains(r#"<div class="fasit-body" hidden><p><strong>x = 4</strong></p>"#));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn other_fenced_blocks_stay_code() {
        let html = render_markdown("```\nx = 4\n```\n").into_string();
        assert!(html.contains("<pre><code>x = 4\n</code></pre>"));
        assert!(!html.contains("fasit"));
    }
}
