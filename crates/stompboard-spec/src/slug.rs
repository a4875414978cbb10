//! URL-safe slugs.
//!
//! A slug is the join key between a pedal record and its generated model:
//! lowercase ASCII letters and digits in runs separated by single hyphens.

use std::sync::OnceLock;

use regex::Regex;

/// Regex pattern for a well-formed slug.
const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
static NON_ALNUM_REGEX: OnceLock<Regex> = OnceLock::new();

fn slug_regex() -> &'static Regex {
    SLUG_REGEX.get_or_init(|| Regex::new(SLUG_PATTERN).expect("invalid regex pattern"))
}

fn non_alnum_regex() -> &'static Regex {
    NON_ALNUM_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("invalid regex pattern"))
}

/// Converts arbitrary text into a slug.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen, and trims hyphens from both ends.
///
/// # Example
/// ```
/// use stompboard_spec::slug::create_slug;
///
/// assert_eq!(create_slug("Walrus Audio Jupiter V2"), "walrus-audio-jupiter-v2");
/// assert_eq!(create_slug("  MS-70CDR!! "), "ms-70cdr");
/// ```
pub fn create_slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let collapsed = non_alnum_regex().replace_all(&lower, "-");
    collapsed.trim_matches('-').to_string()
}

/// Derives the slug of a pedal from its manufacturer and name.
pub fn pedal_slug(manufacturer: &str, name: &str) -> String {
    create_slug(&format!("{} {}", manufacturer, name))
}

/// Returns the record file name for a pedal (`<slug>.json`).
pub fn pedal_filename(manufacturer: &str, name: &str) -> String {
    format!("{}.json", pedal_slug(manufacturer, name))
}

/// Checks whether `slug` is a well-formed slug.
pub fn is_valid_slug(slug: &str) -> bool {
    slug_regex().is_match(slug)
}
