use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use flate2::read::GzDecoder;

/// Open an input file for reading lines, decompressing `*.gz` files.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| anyhow!("{}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        tracing::debug!(path = %path.display(), "reading gzipped input");
        return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
    }

    Ok(Box::new(BufReader::new(file)))
}
