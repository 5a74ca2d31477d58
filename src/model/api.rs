use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::ValidationError;

/// Header carrying the id of the calling user.
pub const SHARER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Flat error body returned by both services.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    /// Short category of the failure, e.g. `"Booking dates"`.
    pub reason: String,
    /// Human readable description.
    pub error: String,
}

impl ErrorDto {
    pub fn new(reason: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            error: error.into(),
        }
    }
}

/// Offset-style pagination query (`from`, `size`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// Validated page request: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl PageParams {
    pub fn new(from: Option<i64>, size: Option<i64>) -> Self {
        Self { from, size }
    }

    /// Converts `from`/`size` into a page request.
    ///
    /// Pagination only applies when both values are present; `from` must be non-negative
    /// and `size` positive. The page index is `from / size`.
    ///
    /// # Returns
    /// - `Ok(Some(PageRequest))` - Both values present and valid
    /// - `Ok(None)` - Either value absent, the whole result is returned
    /// - `Err(ValidationError::IllegalPageable)` - Negative offset or non-positive size
    pub fn page_request(&self) -> Result<Option<PageRequest>, ValidationError> {
        match (self.from, self.size) {
            (Some(from), Some(size)) => {
                if from < 0 || size <= 0 {
                    return Err(ValidationError::IllegalPageable { from, size });
                }
                Ok(Some(PageRequest {
                    page: (from / size) as u64,
                    size: size as u64,
                }))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offset_to_page_index() {
        let request = PageParams::new(Some(20), Some(10)).page_request().unwrap();

        assert_eq!(request, Some(PageRequest { page: 2, size: 10 }));
    }

    #[test]
    fn offset_inside_page_rounds_down() {
        let request = PageParams::new(Some(5), Some(10)).page_request().unwrap();

        assert_eq!(request, Some(PageRequest { page: 0, size: 10 }));
    }

    #[test]
    fn missing_value_disables_pagination() {
        assert_eq!(PageParams::new(None, Some(10)).page_request().unwrap(), None);
        assert_eq!(PageParams::new(Some(0), None).page_request().unwrap(), None);
        assert_eq!(PageParams::default().page_request().unwrap(), None);
    }

    #[test]
    fn rejects_negative_offset() {
        let result = PageParams::new(Some(-1), Some(10)).page_request();

        assert!(matches!(
            result,
            Err(ValidationError::IllegalPageable { from: -1, size: 10 })
        ));
    }

    #[test]
    fn rejects_zero_size() {
        let result = PageParams::new(Some(0), Some(0)).page_request();

        assert!(matches!(result, Err(ValidationError::IllegalPageable { .. })));
    }
}
