use super::DomainError;

/// Number of questions shown on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(value: i64) -> Result<Self, DomainError> {
        u64::try_from(value)
            .ok()
            .filter(|page| *page >= 1)
            .map(Self)
            .ok_or(DomainError::InvalidPage(value))
    }

    /// Parses the raw `page` query value, falling back to the first page
    /// when it is absent or not a positive integer.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .and_then(|value| Self::new(value).ok())
            .unwrap_or(Self::FIRST)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    fn offset(self) -> usize {
        usize::try_from(self.0 - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for Page {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Returns the items that fall on `page`. Pages past the end are empty.
pub fn paginate<T>(page: Page, items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset())
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
