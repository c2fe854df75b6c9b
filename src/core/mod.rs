//! Core data structures for Starter.
//!
//! - Framework choices and the template families they select from
//! - Project requests and name validation
//! - Template root layout

pub mod framework;
pub mod request;
pub mod template;

pub use framework::{ContractFramework, FrontendFramework, TemplateKind};
pub use request::{ProjectRequest, DEFAULT_PROJECT_NAME};
pub use template::{TemplateEntry, TemplateRoot};
