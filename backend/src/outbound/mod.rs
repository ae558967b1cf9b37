//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: account storage behind the `AccountRepository` port.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
