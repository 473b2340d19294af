// Customer domain module
// Contains the customer record, its id value object and write validation

#![allow(clippy::module_inception)]

pub mod customer;
pub mod validation;
pub mod value_objects;

// Re-export main types for convenience
pub use customer::{Customer, CustomerData};
pub use validation::{validate_customer, ValidationError};
pub use value_objects::CustomerId;
