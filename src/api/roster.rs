/// The record collection built by pagination.
use serde_json::{Map, Value};

/// One user as returned by the service. No local schema; extra fields are kept.
pub type UserRecord = Map<String, Value>;

/// Every user retrieved in one run, in API return order.
///
/// Append-only, and only whole pages are ever appended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<UserRecord>,
}

impl Roster {
    /// Commit a full page to the end of the roster.
    pub fn append_page(&mut self, page: Vec<UserRecord>) {
        self.records.extend(page);
    }

    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<UserRecord>> for Roster {
    fn from(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}
