//! Service layer for the company and invoice resources.
//! - Repositories hide the storage engine (PostgreSQL via SeaORM, or in-memory).
//! - Services own the presence/existence checks and assemble enriched reads.
//! - Every failure is a `ServiceError`; mapping to HTTP happens in the server crate.

pub mod errors;
pub mod company;
pub mod invoice;
pub mod db;
pub mod memory;
#[cfg(test)]
pub mod test_support;
