#[allow(clippy::module_inception)]
pub mod belief;
pub mod entrenchment;
pub mod error;
pub mod knowledge_base;
pub mod operators;
pub mod order;
