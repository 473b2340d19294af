// Domain layer module exports
// Domain is independent of HTTP concerns

pub mod customer;
pub mod repositories;
