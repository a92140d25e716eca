/// Result of probing a tenant's table API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionCheck {
    /// The backend answered. `row_count` comes from `Content-Range` when the
    /// backend reports it.
    Connected { row_count: Option<u64> },
    /// The backend answered with a non-success status.
    Rejected { status: u16, reason: String },
}

impl ConnectionCheck {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionCheck::Connected { .. })
    }
}

/// Parse the total out of a `Content-Range` value like `0-0/42` or `*/42`.
pub(crate) fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit_once('/')?.1.trim().parse().ok()
}
