use async_trait::async_trait;
use thiserror::Error;

use crate::domain::customer::{Customer, CustomerData, CustomerId};

/// Infrastructure failure raised by a repository
///
/// Displays the underlying driver error text unchanged.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("database returned an invalid id: {0}")]
    InvalidId(u64),
}

/// Repository trait for customers
///
/// Each method issues a single statement; there are no explicit transactions.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List every customer, newest id first
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    /// Find a customer by its ID
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Insert a customer and return the id assigned by the database
    async fn create(&self, data: &CustomerData) -> Result<CustomerId, RepositoryError>;

    /// Replace every mutable field; `false` when no row has this id
    async fn update(&self, id: CustomerId, data: &CustomerData) -> Result<bool, RepositoryError>;

    /// Delete a customer; `false` when no row has this id
    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError>;
}
