use super::error::ValidationError;

/// Whatever the visitor typed, trimmed and uppercased. Any non-empty string is
/// accepted; the result shown is always the same demo order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingQuery(String);

impl TrackingQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyOrderId);
        }
        Ok(TrackingQuery(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn header(&self) -> String {
        format!("Order #{}", self.0)
    }
}

/// Enter in the order-id box acts like the track button.
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackingPanel {
    pub input: String,
    /// Query captured when the lookup started; later edits don't change it.
    pub pending: Option<TrackingQuery>,
    /// Header of the result block. The block stays hidden while `None`.
    pub result_header: Option<String>,
}
