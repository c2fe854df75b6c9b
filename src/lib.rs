//! Starter - scaffold web3 projects from templates
//!
//! This crate provides the core library functionality for Starter:
//! materializing a project from a contract template and a frontend
//! template, and deriving the contract include list a generated
//! project's code generator consumes.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for Starter unit tests.
///
/// Only compiled for tests. Provides on-disk template fixtures and tree
/// comparison helpers.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    framework::{ContractFramework, FrontendFramework, TemplateKind},
    request::ProjectRequest,
    template::TemplateRoot,
};

pub use ops::errors::InitError;
pub use util::context::GlobalContext;
