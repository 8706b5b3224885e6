//! stacklink - SAW process design/measurement catalog and stack linker
//!
//! Extracts a normalized layer stack from design (`.mpar`) and measurement
//! (`.rpar`) files, catalogs them in natural order, and links each design to
//! the measurements that reference it or share its stack.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod enrich;
pub mod extract;
pub mod link;
pub mod output;
pub mod scan;
pub mod stack;
pub mod walker;

pub use crate::catalog::{Catalog, DesignCatalog, DesignRecord, MeasurementCatalog, MeasurementRecord};
pub use crate::core::config::Config;
pub use crate::core::error::{Error, Result};
pub use crate::link::{link, LinkTable};
pub use crate::stack::{StackRecord, StackValue};
