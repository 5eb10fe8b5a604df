//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, `tools`: the Confluence endpoint
//! catalog and its execution.

pub mod tools;
