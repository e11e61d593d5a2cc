use crate::results::{Headings, PageRecord};
use crate::utils::dedup_preserving_order;

/// Turns crawled records into the final corpus.
///
/// Every list is deduplicated again and pages with neither a real title
/// nor any paragraph are dropped. Order is preserved.
pub fn clean(records: Vec<PageRecord>) -> Vec<PageRecord> {
    let total = records.len();
    let cleaned: Vec<PageRecord> = records
        .into_iter()
        .map(clean_page)
        .filter(PageRecord::has_content)
        .collect();

    ::log::info!(
        "Data cleaned: kept {} of {} pages",
        cleaned.len(),
        total
    );
    cleaned
}

fn clean_page(page: PageRecord) -> PageRecord {
    PageRecord {
        title: page.title,
        headings: Headings {
            h1: dedup_preserving_order(page.headings.h1),
            h2: dedup_preserving_order(page.headings.h2),
            h3: dedup_preserving_order(page.headings.h3),
        },
        paragraphs: dedup_preserving_order(page.paragraphs),
        links: dedup_preserving_order(page.links),
        images: dedup_preserving_order(page.images),
    }
}
