//! Static site generation.
//!
//! Renders every page the site can show and writes it under the output
//! directory, so any static file host can serve the compendium.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                     # Home: chapter cards
//! ├── 404.html                       # Not-found page for unknown paths
//! ├── favicon.svg                    # Copied from content/assets/
//! ├── tall-og-algebra/
//! │   ├── teori/index.html
//! │   ├── eksempler/index.html
//! │   ├── ving/index.html
//! │   └── eksamensoppgaver/index.html
//! └── likninger-og-ulikheter/
//!     └── ...
//! ```
//!
//! Hosts that serve `404.html` for missing paths (Netlify, GitHub Pages) give
//! unknown routes the same not-found page the resolver produces.

use crate::route::Route;
use crate::shell::Site;
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("asset '{0}' would overwrite a generated page")]
    AssetCollision(String),
}

/// Kind of a generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Authored(Route),
    Placeholder(Route),
    NotFound,
}

/// One written HTML file.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub kind: PageKind,
    /// Path relative to the output directory, `/`-separated.
    pub output: String,
}

/// Inventory of a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
    /// Files copied from `assets/`, relative to the output directory.
    pub assets: Vec<String>,
}

impl GeneratedSite {
    pub fn authored_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.kind, PageKind::Authored(_)))
            .count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p.kind, PageKind::Placeholder(_)))
            .count()
    }
}

/// Render the whole site into `output_dir`.
///
/// `assets_dir` is copied verbatim to the output root when it exists.
pub fn generate(
    site: &Site<'_>,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<GeneratedSite, GenerateError> {
    let assets = list_assets(assets_dir)?;
    if let Some(clash) = assets.iter().find(|(_, relative)| is_page_output(site, relative)) {
        return Err(GenerateError::AssetCollision(clash.1.clone()));
    }

    fs::create_dir_all(output_dir)?;
    let mut result = GeneratedSite {
        assets: copy_assets(assets, output_dir)?,
        ..Default::default()
    };

    write_page(output_dir, "index.html", site.render_home())?;
    result.pages.push(GeneratedPage {
        kind: PageKind::Home,
        output: "index.html".to_string(),
    });

    for route in site.catalog.routes() {
        let output = route.output_path();
        write_page(output_dir, &output, site.render_route(&route))?;
        let kind = if site.content.content(&route).is_authored() {
            PageKind::Authored(route)
        } else {
            PageKind::Placeholder(route)
        };
        result.pages.push(GeneratedPage { kind, output });
    }

    write_page(output_dir, "404.html", site.render_not_found())?;
    result.pages.push(GeneratedPage {
        kind: PageKind::NotFound,
        output: "404.html".to_string(),
    });

    tracing::info!(
        pages = result.pages.len(),
        assets = result.assets.len(),
        output = %output_dir.display(),
        "site generated"
    );
    Ok(result)
}

fn write_page(output_dir: &Path, relative: &str, page: Markup) -> std::io::Result<()> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, page.into_string())?;
    tracing::debug!(file = %path.display(), "wrote page");
    Ok(())
}

fn is_page_output(site: &Site<'_>, relative: &str) -> bool {
    relative == "index.html"
        || relative == "404.html"
        || site.catalog.routes().any(|route| route.output_path() == relative)
}

/// Files under `src` as (source path, `/`-separated relative path) pairs.
/// A missing `src` has no assets.
fn list_assets(src: &Path) -> Result<Vec<(PathBuf, String)>, GenerateError> {
    let mut assets = Vec::new();
    if !src.is_dir() {
        return Ok(assets);
    }
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let relative = relative.to_string_lossy().replace('\\', "/");
        assets.push((entry.path().to_path_buf(), relative));
    }
    Ok(assets)
}

fn copy_assets(
    assets: Vec<(PathBuf, String)>,
    dst: &Path,
) -> Result<Vec<String>, GenerateError> {
    let mut copied = Vec::with_capacity(assets.len());
    for (source, relative) in assets {
        let target = dst.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, &target)?;
        copied.push(relative);
    }
    Ok(copied)
}
