pub mod customers;
pub mod health;
