//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and their backing store and
//! carry no business rules.

pub mod memory;
