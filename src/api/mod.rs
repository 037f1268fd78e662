/// User-management API layer: endpoints, HTTP page source, pagination.
pub mod client;
pub mod endpoint;
pub mod errors;
pub mod paginate;
pub mod roster;
#[cfg(test)]
pub mod stub;

pub use client::{HttpPageSource, PageSource};
pub use endpoint::{Endpoint, Region};
pub use errors::FetchError;
pub use paginate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, fetch_all};
pub use roster::{Roster, UserRecord};
