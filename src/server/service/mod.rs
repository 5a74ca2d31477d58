//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the business
//! rules, work on domain models only, and own transaction boundaries: every mutating method
//! opens one transaction, runs all of its repository calls on it and commits, while
//! read-only methods run directly on the pooled connection.

pub mod booking;
pub mod item;
pub mod request;
pub mod user;

#[cfg(test)]
mod test;
