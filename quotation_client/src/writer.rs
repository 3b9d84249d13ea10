//! Output file for the received quotation.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use quotation_common::Result;

use crate::model::quotation::BidQuotation;

/// Line written for `quotation`, trailing newline included.
pub fn format_line(quotation: &BidQuotation) -> String {
    format!("Dólar: {}\n", quotation.bid)
}

/// Create or truncate `path` and write the quotation line in one go.
pub fn save_quotation_file(path: &Path, quotation: &BidQuotation) -> Result<()> {
    info!("Saving quotation in '{}'", path.display());

    let mut file = File::create(path)?;
    file.write_all(format_line(quotation).as_bytes())?;
    file.sync_all()?;
    Ok(())
}
