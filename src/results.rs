use serde::{Deserialize, Serialize};

/// Title recorded for pages that do not declare a `<title>`
pub const NO_TITLE: &str = "No title";

/// Headings of a page, grouped by level.
///
/// All three levels are always present, even when empty, so the
/// serialized corpus has a stable shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    #[serde(default)]
    pub h1: Vec<String>,
    #[serde(default)]
    pub h2: Vec<String>,
    #[serde(default)]
    pub h3: Vec<String>,
}

impl Headings {
    /// Mutable access to a level by its number (1 to 3)
    pub fn level_mut(&mut self, level: u8) -> Option<&mut Vec<String>> {
        match level {
            1 => Some(&mut self.h1),
            2 => Some(&mut self.h2),
            3 => Some(&mut self.h3),
            _ => None,
        }
    }

    /// Iterates over `(tag, headings)` pairs in level order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("h1", self.h1.as_slice()),
            ("h2", self.h2.as_slice()),
            ("h3", self.h3.as_slice()),
        ]
        .into_iter()
    }
}

/// Structured content extracted from one crawled page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Normalized page title, or [`NO_TITLE`]
    pub title: String,

    /// h1 to h3 headings, normalized and deduplicated
    #[serde(default)]
    pub headings: Headings,

    /// Paragraph text, normalized and deduplicated
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Absolute link targets without fragments
    #[serde(default)]
    pub links: Vec<String>,

    /// Absolute image sources
    #[serde(default)]
    pub images: Vec<String>,
}

impl PageRecord {
    /// Whether the page carries a real title.
    ///
    /// Empty titles and the [`NO_TITLE`] placeholder both count as missing.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty() && self.title != NO_TITLE
    }

    /// Whether the page has anything worth keeping in the corpus
    pub fn has_content(&self) -> bool {
        self.has_title() || !self.paragraphs.is_empty()
    }
}
