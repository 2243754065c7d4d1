//! Pure search, sort and pagination over borrowed rows.
//!
//! None of these functions touch the input collection; they return new
//! vectors of references or sub-slices.

use super::column::Column;
use super::state::SortDirection;
use super::value::{compare_keys, contains_folded, folded_text};

/// Rows where any searchable column contains `term`, case-insensitively.
///
/// An empty term keeps every row. Input order is preserved.
pub fn filter_rows<'a, T>(rows: &'a [T], columns: &[Column<T>], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return rows.iter().collect();
    }

    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| {
            columns
                .iter()
                .filter(|column| column.is_searchable())
                .any(|column| contains_folded(&column.value(row), &needle))
        })
        .collect()
}

/// Stable sort of `rows` by the coerced value of `column`.
///
/// Nulls go last in both directions. See [`compare_keys`] for the ordering.
pub fn sort_rows<T>(rows: &mut Vec<&T>, column: &Column<T>, direction: SortDirection) {
    let mut keyed: Vec<(Option<String>, &T)> = rows
        .drain(..)
        .map(|row| (folded_text(&column.value(row)), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_deref(), b.as_deref(), direction));

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Number of pages needed for `len` rows. Zero rows need zero pages.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Rows of 1-indexed `page`. Out-of-range pages are empty.
pub fn paginate<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(per_page)) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(rows.len());
    &rows[start..end]
}
