//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod account_service;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::AccountService;
