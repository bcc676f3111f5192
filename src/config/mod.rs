//! Configuration Resolution
//!
//! Turns an environment-style key/value mapping into an immutable
//! [`RoutingConfig`](crate::types::RoutingConfig). Loading a `.env` file (or
//! any other population of the process environment) is the caller's business;
//! this module only reads the mapping it is given.

pub mod keys;
mod resolver;

pub use resolver::ConfigResolver;
