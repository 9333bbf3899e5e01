use regex::Regex;

/// Derive a URL-safe slug from a display name: lowercase, non-alphanumeric
/// runs collapsed to single dashes, no leading/trailing dash.
pub fn slugify(name: &str) -> String {
    let re = Regex::new(r"[^a-z0-9]+").unwrap();
    re.replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
