// Infrastructure layer module
// Contains the connection pool and database adapters

pub mod database;
pub mod repositories;
