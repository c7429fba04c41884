//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` at the
//! root of the content directory. Stock defaults are serialized to a TOML
//! table and the user file is merged on top, so a config file only needs the
//! keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Matematikk 1T – Kompendium"
//! lang = "nb"
//!
//! [theme]
//! max_width = "64rem"       # Width of header and main column
//! card_gap = "1.5rem"       # Gap between chapter cards on the home page
//!
//! [theme.padding]
//! size = "4vw"              # Preferred page padding
//! min = "1rem"
//! max = "1.5rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#1f2937"
//! text_muted = "#4b5563"    # Placeholder text, card borders
//! border = "#e5e7eb"
//! link = "#2563eb"
//! link_hover = "#1d4ed8"
//! header_background = "#2563eb"
//! header_text = "#ffffff"
//! accent = "#22c55e"        # Answer (fasit) blocks
//! error = "#ef4444"         # Not-found message
//!
//! [colors.dark]
//! # same keys as [colors.light]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Shown in the header of every page and used as the home page title.
    pub site_title: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Matematikk 1T – Kompendium".to_string(),
            lang: "nb".to_string(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_title must not be empty".into(),
            ));
        }
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        Ok(())
    }
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"4vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"1rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"1.5rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the header bar and main column (CSS value).
    pub max_width: String,
    /// Gap between chapter cards on the home page (CSS value).
    pub card_gap: String,
    /// Padding around the main column.
    pub padding: ClampSize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "64rem".to_string(),
            card_gap: "1.5rem".to_string(),
            padding: ClampSize {
                size: "4vw".to_string(),
                min: "1rem".to_string(),
                max: "1.5rem".to_string(),
            },
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text (placeholders).
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Site header bar.
    pub header_background: String,
    pub header_text: String,
    /// Left border of revealed answers.
    pub accent: String,
    /// Not-found message.
    pub error: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            link: "#2563eb".to_string(),
            link_hover: "#1d4ed8".to_string(),
            header_background: "#2563eb".to_string(),
            header_text: "#ffffff".to_string(),
            accent: "#22c55e".to_string(),
            error: "#ef4444".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111827".to_string(),
            text: "#e5e7eb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            link: "#60a5fa".to_string(),
            link_hover: "#93c5fd".to_string(),
            header_background: "#1e3a8a".to_string(),
            header_text: "#f9fafb".to_string(),
            accent: "#4ade80".to_string(),
            error: "#f87171".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// A missing directory or file yields the stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        tracing::debug!(root = %root.display(), "no config.toml, using stock defaults");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Kompendium Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the content directory (content/config.toml).
# Unknown keys will cause an error.

# Shown in the header of every page.
site_title = "Matematikk 1T – Kompendium"

# Language of the generated pages (<html lang="...">).
lang = "nb"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Maximum width of the header bar and main column (CSS value).
max_width = "64rem"

# Gap between chapter cards on the home page (CSS value).
card_gap = "1.5rem"

# Padding around the main column, as CSS clamp(min, size, max).
[theme.padding]
size = "4vw"
min = "1rem"
max = "1.5rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#1f2937"
text_muted = "#4b5563"          # Placeholder text
border = "#e5e7eb"
link = "#2563eb"
link_hover = "#1d4ed8"
header_background = "#2563eb"
header_text = "#ffffff"
accent = "#22c55e"              # Revealed answers
error = "#ef4444"               # Not-found message

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111827"
text = "#e5e7eb"
text_muted = "#9ca3af"
border = "#374151"
link = "#60a5fa"
link_hover = "#93c5fd"
header_background = "#1e3a8a"
header_text = "#f9fafb"
accent = "#4ade80"
error = "#f87171"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_variables(&colors.light, 1),
        dark = color_variables(&colors.dark, 2),
    )
}

fn color_variables(scheme: &ColorScheme, depth: usize) -> String {
    let indent = "    ".repeat(depth);
    [
        ("bg", &scheme.background),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("link", &scheme.link),
        ("link-hover", &scheme.link_hover),
        ("header-bg", &scheme.header_background),
        ("header-text", &scheme.header_text),
        ("accent", &scheme.accent),
        ("error", &scheme.error),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --card-gap: {card_gap};
    --page-padding: {padding};
}}"#,
        max_width = theme.max_width,
        card_gap = theme.card_gap,
        padding = theme.padding.to_css(),
    )
}
