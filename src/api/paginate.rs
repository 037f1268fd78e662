/// Offset pagination over a `PageSource`.
use super::client::PageSource;
use super::errors::FetchError;
use super::roster::Roster;

/// The service's maximum page size, and the default offset increment.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Default offset increment between pages.
pub const DEFAULT_PAGE_SIZE: usize = MAX_PAGE_SIZE;

/// Fetch every page from `source`, starting at offset 0.
///
/// The offset advances by `page_size` after each non-empty page. Only an empty
/// page ends the loop; a short page does not.
///
/// # Errors
///
/// Returns the first `FetchError`. Pages already collected are dropped with it.
pub fn fetch_all<S: PageSource + ?Sized>(
    source: &S,
    page_size: usize,
) -> Result<Roster, FetchError> {
    let mut roster = Roster::default();
    let mut offset = 0;

    loop {
        let page = source.fetch_page(offset)?;
        if page.is_empty() {
            break;
        }
        roster.append_page(page);
        offset += page_size;
    }

    Ok(roster)
}
