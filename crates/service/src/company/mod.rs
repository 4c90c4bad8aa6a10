//! Company resource: domain types, repository abstraction, and service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CompanyService;
