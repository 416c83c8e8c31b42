use serde::{Deserialize, Serialize};

/// Page size used when a caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Page size for JSON listing endpoints when the caller sends none.
pub const API_PAGE_SIZE: u32 = 10;

/// A 1-based page request. Construction clamps, it never fails; deserialized
/// requests go through the same clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPageRequest")]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

/// Wire shape of a [`PageRequest`] before clamping.
#[derive(Deserialize)]
#[serde(default)]
struct RawPageRequest {
    page: i64,
    page_size: i64,
}

impl Default for RawPageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: i64::from(DEFAULT_PAGE_SIZE),
        }
    }
}

impl From<RawPageRequest> for PageRequest {
    fn from(raw: RawPageRequest) -> Self {
        PageRequest::new(raw.page, raw.page_size)
    }
}

impl PageRequest {
    /// Clamps `page` and `page_size` to at least 1.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: clamp_positive(page),
            page_size: clamp_positive(page_size),
        }
    }

    pub fn first(page_size: u32) -> Self {
        Self::new(1, i64::from(page_size))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Index of the first element on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

fn clamp_positive(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

/// One page of an ordered result plus the pre-slice total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(self.page_size.max(1) as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Slice `[(page-1)*size, page*size)` out of an ordered sequence, clipped to
/// its bounds. Only the requested window is collected.
pub fn paginate<I>(ordered: I, request: PageRequest) -> Page<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let iter = ordered.into_iter();
    let total = iter.len();
    let items = iter
        .skip(request.offset())
        .take(request.page_size() as usize)
        .collect();

    Page {
        items,
        total,
        page: request.page(),
        page_size: request.page_size(),
    }
}
