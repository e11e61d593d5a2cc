/// Normalizes a text fragment extracted from a page.
///
/// Leading and trailing whitespace is removed and every remaining run of
/// whitespace (spaces, tabs, newlines) collapses to a single space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes every fragment, dropping the ones that end up empty
pub fn normalize_all<I, S>(fragments: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|fragment| normalize(fragment.as_ref()))
        .filter(|text| !text.is_empty())
}
