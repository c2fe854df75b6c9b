//! High-level operations.
//!
//! This module contains the implementation of Starter commands.

pub mod codegen;
pub mod errors;
pub mod includes;
pub mod starter_new;

pub use codegen::{codegen_config, CodegenConfig, CodegenOptions, Plugin};
pub use errors::InitError;
pub use includes::{extract_include_paths, find_contracts, ContractInfo};
pub use starter_new::{initialize, resolve_request, NewOptions, ProjectLayout, RequestInputs};
