use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored booking status is not one of the known values.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to the client.
    #[error("Booking {booking_id} has unknown status '{value}'")]
    UnknownBookingStatus {
        /// Booking whose row holds the value
        booking_id: i32,
        /// The raw column value
        value: String,
    },

    /// A row referenced by a loaded record is missing.
    #[error("{entity} {id} referenced by a stored record is missing")]
    DanglingReference { entity: &'static str, id: i32 },
}
