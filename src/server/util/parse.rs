use crate::{model::booking::BookingStatus, server::error::internal::InternalError};

/// Parses a stored booking status column value.
///
/// # Arguments
/// - `booking_id` - Booking the value belongs to, reported on failure
/// - `value` - Raw column text
///
/// # Returns
/// - `Ok(BookingStatus)` - Value is one of `WAITING`, `APPROVED`, `REJECTED`
/// - `Err(InternalError::UnknownBookingStatus)` - Any other text
pub fn parse_booking_status(booking_id: i32, value: String) -> Result<BookingStatus, InternalError> {
    BookingStatus::parse(&value).ok_or(InternalError::UnknownBookingStatus { booking_id, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_status() {
        let status = parse_booking_status(1, "APPROVED".to_string()).unwrap();

        assert_eq!(status, BookingStatus::Approved);
    }

    #[test]
    fn unknown_status_is_internal_error() {
        let result = parse_booking_status(3, "CANCELED".to_string());

        assert!(matches!(
            result,
            Err(InternalError::UnknownBookingStatus { booking_id: 3, ref value }) if value == "CANCELED"
        ));
    }
}
