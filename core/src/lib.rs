pub mod catalog;
pub mod config;
pub mod generator;
pub mod render;

pub use catalog::{Catalog, NamedSkill, Row, RowId, SkillDescriptor};
pub use config::*;
pub use generator::{GenerateReport, OutputStatus, TableGenerator};
pub use render::Layout;
