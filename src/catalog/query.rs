//! Catalog search and pagination
//!
//! Page numbers follow the lenient paginator the web listing always used:
//! garbage falls back to the first page, anything past the end clamps to the
//! last page, and an empty result still has one (empty) page.

use serde::Serialize;

use crate::catalog::record::Pokemon;
use crate::core::constants::DEFAULT_PAGE_SIZE;

/// A search over the catalog, ordered by number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Trimmed search text, empty for "everything"
    pub text: String,
    /// Raw page parameter as submitted
    pub page: Option<String>,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            page: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    pub fn new(text: Option<&str>, page: Option<&str>, page_size: usize) -> Self {
        Self {
            text: text.map(|t| t.trim().to_string()).unwrap_or_default(),
            page: page.map(str::to_string),
            page_size: page_size.max(1),
        }
    }

    /// Number to match exactly, when the text is all digits
    pub fn number(&self) -> Option<u32> {
        if !self.text.is_empty() && self.text.chars().all(|c| c.is_ascii_digit()) {
            self.text.parse().ok()
        } else {
            None
        }
    }

    /// Whether a record satisfies the search text
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let name_hit = pokemon
            .name
            .to_lowercase()
            .contains(&self.text.to_lowercase());
        name_hit || self.number() == Some(pokemon.number)
    }

    /// Resolve the requested page against a total row count
    pub fn resolve_page(&self, total: usize) -> usize {
        let num_pages = num_pages(total, self.page_size);
        match self.page.as_deref().map(str::trim).map(str::parse::<i64>) {
            None | Some(Err(_)) => 1,
            Some(Ok(p)) if p < 1 || p as usize > num_pages => num_pages,
            Some(Ok(p)) => p as usize,
        }
    }

    /// Zero-based row offset of a page
    pub fn offset(&self, page: usize) -> usize {
        (page - 1) * self.page_size
    }
}

pub fn num_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// One page of results
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// One-based page number
    pub number: usize,
    pub num_pages: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Slice an already filtered and ordered list into the requested page
pub fn paginate<T: Clone>(rows: &[T], query: &CatalogQuery) -> Page<T> {
    let total = rows.len();
    let number = query.resolve_page(total);
    let items = rows
        .iter()
        .skip(query.offset(number))
        .take(query.page_size)
        .cloned()
        .collect();
    Page {
        items,
        number,
        num_pages: num_pages(total, query.page_size),
        total,
    }
}
