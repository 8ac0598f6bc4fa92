//! Form model: step navigation, field descriptors, and repeatable blocks.

pub mod navigator;
pub mod projects;
pub mod schema;
pub mod steps;

pub use navigator::{StepNavigator, StepView};
pub use projects::{create_block, ProjectBlock, ProjectContainer};
pub use schema::{FieldKind, FieldSpec};
pub use steps::{intake_steps, StepPanel};
