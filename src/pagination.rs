use serde::Deserialize;

use crate::names::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};

/// `?page=N` query parameter, 1-based.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

/// Return page `page` (1-based) of `items`.
///
/// The slice covers `[(page - 1) * 10, page * 10)` clipped to the input.
/// Pages past the end, and pages below 1, are empty; callers decide
/// whether an empty page is an error.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| idx.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return &[];
    };

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
