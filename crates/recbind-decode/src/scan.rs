//! # Record Scanner
//!
//! Reads record files into [`RecordPair`]s, keeping only required keys.
//!
//! ## Line Policy
//!
//! - The first `header_lines` lines are skipped.
//! - A line exactly equal to the terminator ends the record; so does EOF.
//! - A data line splits on the FIRST delimiter only. Further delimiters
//!   belong to the value, so `site: http://acme` has value `http://acme`.
//! - A line without a delimiter is a bare key with an explicit null value.
//! - Keys and values are trimmed and lose their surrounding quotes.
//!
//! Lines whose key is not required are dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use recbind_core::{DecodeError, RecordPair, RequiredKeys};

use crate::config::ScanConfig;

/// List the record files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into. Files rejected by the config's
/// extension filter are skipped.
///
/// # Errors
///
/// Returns [`DecodeError::Directory`] if `dir` cannot be listed.
pub fn record_files(dir: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, DecodeError> {
    let directory_error = |source| DecodeError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(directory_error)? {
        let path = entry.map_err(directory_error)?.path();
        if path.is_file() && config.accepts(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Scan one record file. The file handle is closed before returning.
///
/// # Errors
///
/// Returns the IO error from opening or reading the file, including
/// `InvalidData` for content that is not UTF-8.
pub fn scan_file(
    path: &Path,
    required: &RequiredKeys,
    config: &ScanConfig,
) -> io::Result<Vec<RecordPair>> {
    let file = File::open(path)?;
    scan_record(BufReader::new(file), required, config)
}

/// Scan a record from any buffered reader.
///
/// # Errors
///
/// Returns the first IO error raised by `reader`.
pub fn scan_record<R: BufRead>(
    reader: R,
    required: &RequiredKeys,
    config: &ScanConfig,
) -> io::Result<Vec<RecordPair>> {
    let mut pairs = Vec::new();
    let mut lines = reader.lines();

    for _ in 0..config.header_lines {
        if lines.next().transpose()?.is_none() {
            return Ok(pairs);
        }
    }

    for line in lines {
        let line = line?;
        if line == config.terminator {
            break;
        }
        let pair = split_line(&line, config);
        if required.contains(&pair.key) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// Split a data line into a key and an optional value.
pub fn split_line(line: &str, config: &ScanConfig) -> RecordPair {
    match line.split_once(config.delimiter) {
        Some((key, value)) => RecordPair::new(clean(key, config.quote), clean(value, config.quote)),
        None => RecordPair::null(clean(line, config.quote)),
    }
}

fn clean(part: &str, quote: char) -> &str {
    part.trim().trim_matches(quote).trim()
}
