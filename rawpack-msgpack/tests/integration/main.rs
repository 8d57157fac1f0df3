//! Consolidated integration tests for rawpack-msgpack.

mod boundaries;
mod compat;
mod properties;
