// Repository interfaces (ports)
// Implemented by the infrastructure layer

pub mod customer_repository;

pub use customer_repository::{CustomerRepository, RepositoryError};
