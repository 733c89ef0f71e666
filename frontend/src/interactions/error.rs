use thiserror::Error;

/// The only failure a visitor can cause: leaving something required empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),
    #[error("Please enter an order ID.")]
    EmptyOrderId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a request from this form is already in flight")]
    AlreadyPending,
}
