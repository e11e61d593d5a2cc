pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::{extract, extract_from_str};
pub use text::normalize;
