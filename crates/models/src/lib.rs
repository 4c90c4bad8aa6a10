//! SeaORM entities for the biztime schema and connection management.
//!
//! Entities mirror the tables created by the `migration` crate.

pub mod db;
pub mod company;
pub mod invoice;

#[cfg(test)]
mod tests;
