//! URL slug normalization for chapter and page-type names.
//!
//! Every route segment on the site is derived from a display name by the same
//! five steps, and published links depend on the exact output:
//!
//! 1. Lowercase (Unicode, locale-independent)
//! 2. Canonical decomposition (NFD)
//! 3. Drop combining diacritical marks (U+0300–U+036F)
//! 4. Collapse every run of characters outside `[a-z0-9]` into one `-`
//! 5. Trim leading and trailing `-`
//!
//! Letters without a canonical decomposition are not transliterated. `ø` and
//! `æ` survive step 3 unchanged and are then treated as separators, so
//! `"Øving"` becomes `"ving"`.
//!
//! ```text
//! "Tall og algebra"           → "tall-og-algebra"
//! "Geometri og areal/volum"   → "geometri-og-areal-volum"
//! "Figurtall og tallmønstre"  → "figurtall-og-tallm-nstre"
//! "Øving"                     → "ving"
//! ```

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Normalize a display name into a URL slug.
///
/// Total: never fails, returns an empty string when nothing alphanumeric
/// remains. Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.nfd().filter(|c| !is_combining_diacritic(*c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            // A run before the first kept char is a leading hyphen: dropped.
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
