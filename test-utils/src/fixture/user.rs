//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test User";

/// Default test user e-mail.
pub const DEFAULT_EMAIL: &str = "test.user@example.com";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test User"`
/// - email: `"test.user@example.com"`
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
    }
}
