use std::ffi::OsString;

/// The literal token in the template that the link list replaces.
pub const PLACEHOLDER: &str = "{{examples}}";

/// Extracts display names from a directory listing, preserving listing order.
///
/// A name is the stem of a filename ending in the literal `.js` (case
/// sensitive, end of string, non-empty stem). Everything else is dropped from
/// the name sequence; non-unicode filenames can never match.
pub fn example_names(listing: &[OsString]) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref EXAMPLE_FILE_REGEX: regex::Regex =
            regex::Regex::new(r"^(.+)\.js$").expect("a valid regex pattern");
    }

    listing
        .iter()
        .filter_map(|name| name.to_str())
        .filter_map(|name| EXAMPLE_FILE_REGEX.captures(name))
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Concatenates one anchor list item per example name, in order, with no
/// separator. Names are spliced in verbatim; they are assumed to be HTML-safe
/// identifiers already.
pub fn link_fragment(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("<li><a href=\"#example:{name}\">{name}</a></li>"))
        .collect()
}

/// Replaces the first occurrence of [`PLACEHOLDER`] in `template` with
/// `fragment`. A template without the placeholder passes through unchanged;
/// that is deliberate, not an error.
pub fn render_page(template: &str, fragment: &str) -> String {
    template.replacen(PLACEHOLDER, fragment, 1)
}
