//! Full pipeline: designs, measurements, link

use crate::cli::{designs, link, measurements, DesignsArgs, MeasurementsArgs};
use crate::core::config::Config;
use crate::core::error::Result;

/// Run every stage in order, passing catalogs along in memory
pub fn run(config: &Config) -> Result<()> {
    let designs = designs::run(
        DesignsArgs {
            root: None,
            output: None,
        },
        config,
    )?;

    let measurements = measurements::run(
        MeasurementsArgs {
            root: None,
            output: None,
            designs: None,
            table: None,
        },
        config,
        Some(&designs),
    )?;

    link::write_links(&designs, &measurements, &config.link_table_path(), false)?;
    Ok(())
}
