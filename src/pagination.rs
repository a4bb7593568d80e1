//! Page slicing for resource listings.

pub const RECORDS_PER_PAGE: usize = 10;

/// Return the 1-based page `page` of `records`, up to [`RECORDS_PER_PAGE`]
/// entries. Pages below 1 clamp to 1; a page past the end is an empty slice,
/// not an error.
pub fn paginate<T>(records: &[T], page: u32) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1) * RECORDS_PER_PAGE;

    if start >= records.len() {
        return &[];
    }

    let end = (start + RECORDS_PER_PAGE).min(records.len());
    &records[start..end]
}
