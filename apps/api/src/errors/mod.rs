//! Error handling for the OurChants API.

pub mod domain;

pub use domain::DomainError;
