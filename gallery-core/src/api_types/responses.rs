use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;
use crate::query::Page;

/// JSON envelope returned by every API call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            total_count: 0,
            page: 0,
            page_size: 0,
            errors: None,
        }
    }

    /// Failure envelope. System errors only ever carry a generic message.
    pub fn error(err: &CatalogueError) -> Self {
        let messages = err.client_messages();
        Self {
            success: false,
            message: messages.first().cloned(),
            data: None,
            total_count: 0,
            page: 0,
            page_size: 0,
            errors: Some(messages),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn paged(page: Page<T>) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(page.items),
            total_count: page.total,
            page: page.page,
            page_size: page.page_size,
            errors: None,
        }
    }
}

impl<T> From<crate::error::Result<T>> for ApiResponse<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::success(data),
            Err(err) => ApiResponse::error(&err),
        }
    }
}
