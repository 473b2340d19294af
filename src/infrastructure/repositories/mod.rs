// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod mysql_customer_repository;

pub use mysql_customer_repository::MySqlCustomerRepository;
