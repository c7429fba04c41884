//! Page chrome and page renderers.
//!
//! Every page shares one document skeleton: a header bar whose site title
//! links home, then a main column. What goes in the column depends on the
//! requested path:
//!
//! | Path | Page |
//! |------|------|
//! | `/` | Chapter cards, each linking to its four page types |
//! | `/{chapter}/{page-type}/` | Back button, `{chapter} – {page type}` heading, content block |
//! | anything else | Not-found message |
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! chapter names and authored text are escaped on interpolation. Styles and
//! the script for the back button and answer toggles are inlined into each
//! page.

use crate::catalog::{Catalog, Chapter};
use crate::config::{self, SiteConfig};
use crate::content::ContentRegistry;
use crate::route::{self, RequestPath, Route};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Shown in place of content when a path resolves to no route.
pub const NOT_FOUND_MESSAGE: &str = "Kapittel eller underside ikke funnet.";

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Everything needed to render any page of the site.
pub struct Site<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub content: &'a ContentRegistry,
    css: String,
}

impl<'a> Site<'a> {
    pub fn new(config: &'a SiteConfig, catalog: &'a Catalog, content: &'a ContentRegistry) -> Self {
        let css = format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&config.colors),
            config::generate_theme_css(&config.theme),
            CSS_STATIC
        );
        Self {
            config,
            catalog,
            content,
            css,
        }
    }

    /// Render whatever `path` points at.
    pub fn render_path(&self, path: &str) -> Markup {
        match route::parse_path(self.catalog, path) {
            RequestPath::Home => self.render_home(),
            RequestPath::Page(route) => self.render_route(&route),
            RequestPath::NotFound => self.render_not_found(),
        }
    }

    /// Home page: one card per chapter, in catalog order.
    pub fn render_home(&self) -> Markup {
        let content = html! {
            div.chapter-grid {
                @for chapter in self.catalog.chapters() {
                    (self.chapter_menu(*chapter))
                }
            }
        };
        self.document(&self.config.site_title, "home", content)
    }

    /// A chapter sub-page with its content block.
    pub fn render_route(&self, route: &Route) -> Markup {
        let title = route.title();
        let block = self.content.content(route);
        let content = html! {
            button.back type="button" data-back { "← Tilbake" }
            h1.page-title { (title) }
            (block.render())
        };
        self.document(&title, "chapter-page", content)
    }

    pub fn render_not_found(&self) -> Markup {
        let content = html! {
            p.not-found { (NOT_FOUND_MESSAGE) }
        };
        self.document(&self.config.site_title, "not-found-page", content)
    }

    fn chapter_menu(&self, chapter: Chapter) -> Markup {
        html! {
            section.chapter-card {
                h2 { (chapter.name()) }
                ul {
                    @for page_type in self.catalog.page_types() {
                        li {
                            a href=(Route::new(chapter, *page_type).path()) { (page_type.name()) }
                        }
                    }
                }
            }
        }
    }

    fn site_header(&self) -> Markup {
        html! {
            header.site-header {
                div.inner {
                    a.site-title href="/" { (self.config.site_title) }
                }
            }
        }
    }

    /// Base HTML document wrapping `content` in the site chrome.
    fn document(&self, title: &str, main_class: &str, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.config.lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(&self.css)) }
                }
                body {
                    (self.site_header())
                    main class=(main_class) {
                        (content)
                    }
                    script { (PreEscaped(JS)) }
                }
            }
        }
    }
}
