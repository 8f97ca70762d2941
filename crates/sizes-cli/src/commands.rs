//! Command implementations.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use sizes_core::{classify, size_index, sort_sizes};
use sizes_model::{Classification, SortOptions};

use crate::cli::{ClassifyArgs, SizeArg, SortArgs};
use crate::summary::render_detail_table;

/// Runs `sizes sort`, returning the lines to print.
pub fn run_sort(args: &SortArgs) -> Result<Vec<String>> {
    let sizes = gather_sizes(&args.sizes)?;
    tracing::debug!(count = sizes.len(), "sorting sizes");
    if args.detail {
        let mut records: Vec<Classification> =
            sizes.iter().map(|size| classify(size)).collect();
        sizes_core::sort_classifications(&mut records);
        return Ok(vec![render_detail_table(&records)]);
    }
    let options = SortOptions::new().with_normalized(args.normalized);
    Ok(sort_sizes(&sizes, &options))
}

/// Runs `sizes index`.
pub fn run_index(args: &SizeArg) -> i64 {
    size_index(&args.size)
}

/// Runs `sizes normalize`.
pub fn run_normalize(args: &SizeArg) -> String {
    sizes_core::normalized_size(&args.size)
}

/// Runs `sizes classify`, returning a JSON document.
pub fn run_classify(args: &ClassifyArgs) -> Result<String> {
    let sizes = gather_sizes(&args.sizes)?;
    let records: Vec<Classification> = sizes.iter().map(|size| classify(size)).collect();
    let json = if args.pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    };
    json.context("serializing classification records")
}

/// Uses positional arguments when given, otherwise reads one size per
/// line from stdin. Blank lines are skipped.
fn gather_sizes(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let stdin = io::stdin();
    let mut sizes = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("reading sizes from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sizes.push(trimmed.to_string());
        }
    }
    Ok(sizes)
}
