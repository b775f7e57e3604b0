//! Response bodies and validators shared by several endpoints.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Confirmation returned by `DELETE /api/news/{id}` and `DELETE /api/categories/{id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DeletedResponse {
    pub deleted: bool,
}

impl DeletedResponse {
    pub fn yes() -> Self {
        Self { deleted: true }
    }
}

/// Rejects strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(BLANK_MESSAGE)));
    }
    Ok(())
}
