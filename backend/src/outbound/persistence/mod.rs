//! Account persistence adapters.
//!
//! Only an in-process store ships with the service. A database-backed
//! adapter plugs in by implementing
//! [`crate::domain::ports::AccountRepository`]; nothing else changes.

mod in_memory_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
