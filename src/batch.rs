//! Batch parsing of resume directories.
//!
//! Files are discovered with `walkdir` and parsed on a rayon pool. One
//! document failing never stops the others: every file ends up in the
//! [`BatchReport`] either as a record or as an error.

use crate::convert::ExtractorRegistry;
use crate::error::{Error, Result};
use crate::parser::ResumeParser;
use crate::record::{render_json, JsonFormat, ResumeRecord, FIELD_NAMES};
use crossbeam_channel::Sender;
use rayon::prelude::*;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for batch parsing.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Worker threads (0 = rayon default)
    pub threads: usize,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Follow symbolic links while walking
    pub follow_links: bool,

    /// Leave files with unsupported extensions out of the report
    pub skip_unsupported: bool,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enable or disable recursion into subdirectories.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Enable or disable following symbolic links.
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Leave files no extractor can read out of the report instead of
    /// recording them as `UnsupportedFormat` failures.
    pub fn with_skip_unsupported(mut self, skip: bool) -> Self {
        self.skip_unsupported = skip;
        self
    }

    /// Only parse the top level of the directory.
    pub fn shallow(mut self) -> Self {
        self.recursive = false;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            threads: 0,
            recursive: true,
            follow_links: false,
            skip_unsupported: false,
        }
    }
}

/// Progress event emitted while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// Discovery finished; `total` files will be parsed
    Discovered { total: usize },
    /// A worker picked up a file
    Started { path: PathBuf },
    /// A file was parsed
    Finished { path: PathBuf },
    /// A file failed
    Failed { path: PathBuf, error: String },
}

/// The result for one file.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Source file
    pub path: PathBuf,
    /// Parsed record or the error that stopped it
    pub result: Result<ResumeRecord>,
}

/// Results of a batch run, sorted by path.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per discovered file
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    fn new(mut outcomes: Vec<BatchOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.path.cmp(&b.path));
        Self { outcomes }
    }

    /// Total number of files.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no files were processed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successfully parsed files with their records.
    pub fn successes(&self) -> impl Iterator<Item = (&Path, &ResumeRecord)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.path.as_path(), r)))
    }

    /// Failed files with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.path.as_path(), e)))
    }

    /// Number of parsed files.
    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// Number of failed files.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Render the report as a JSON array of `{file, record}` / `{file, error}`.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let entries: Vec<serde_json::Value> = self
            .outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(record) => serde_json::json!({
                    "file": o.path.display().to_string(),
                    "record": record,
                }),
                Err(e) => serde_json::json!({
                    "file": o.path.display().to_string(),
                    "error": e.to_string(),
                }),
            })
            .collect();
        render_json(&entries, format)
    }

    /// Write successful records as CSV, one row per file.
    ///
    /// List fields are joined with `"; "`; missing values are empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["file"];
        header.extend_from_slice(&FIELD_NAMES);
        wtr.write_record(&header).map_err(csv_error)?;

        for (path, record) in self.successes() {
            let join = |list: &Option<Vec<String>>| {
                list.as_ref().map(|v| v.join("; ")).unwrap_or_default()
            };
            wtr.write_record([
                path.display().to_string(),
                record.name.clone().unwrap_or_default(),
                record.email.clone().unwrap_or_default(),
                record.mobile_number.clone().unwrap_or_default(),
                record.skills.join("; "),
                join(&record.degree),
                join(&record.experience),
                join(&record.education),
                record.linkedin.clone().unwrap_or_default(),
                record.github.clone().unwrap_or_default(),
                record
                    .no_of_pages
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ])
            .map_err(csv_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn csv_error(err: csv::Error) -> Error {
    Error::Render(format!("CSV write error: {}", err))
}

/// Find the regular files under `dir`.
///
/// Every file is returned, so an unsupported one surfaces later as an
/// `UnsupportedFormat` failure. With `skip_unsupported` set, files the
/// registry cannot read are dropped here instead. Unreadable directory
/// entries are skipped with a log line. Paths come back sorted.
pub fn discover<P: AsRef<Path>>(
    dir: P,
    registry: &ExtractorRegistry,
    options: &BatchOptions,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir).follow_links(options.follow_links);
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        if options.skip_unsupported {
            let supported = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| registry.supports(ext));
            if !supported {
                log::debug!("skipping {}: unsupported extension", entry.path().display());
                continue;
            }
        }
        paths.push(entry.into_path());
    }

    paths.sort();
    Ok(paths)
}

/// Parse every file under `dir`.
pub fn parse_directory<P: AsRef<Path>>(
    parser: &ResumeParser,
    dir: P,
    options: &BatchOptions,
) -> Result<BatchReport> {
    let paths = discover(dir, parser.registry(), options)?;
    parse_paths(parser, &paths, options, None)
}

/// Parse every file under `dir`, streaming progress events.
///
/// The sender is dropped when the batch finishes, so a receiver loop ends
/// on its own.
pub fn parse_directory_with_events<P: AsRef<Path>>(
    parser: &ResumeParser,
    dir: P,
    options: &BatchOptions,
    events: Sender<BatchEvent>,
) -> Result<BatchReport> {
    let paths = discover(dir, parser.registry(), options)?;
    let _ = events.send(BatchEvent::Discovered { total: paths.len() });
    parse_paths(parser, &paths, options, Some(&events))
}

/// Parse a list of files in parallel.
pub fn parse_paths(
    parser: &ResumeParser,
    paths: &[PathBuf],
    options: &BatchOptions,
    events: Option<&Sender<BatchEvent>>,
) -> Result<BatchReport> {
    let run = || -> Vec<BatchOutcome> {
        paths
            .par_iter()
            .map(|path| parse_one(parser, path, events))
            .collect()
    };

    let outcomes = if options.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()
            .map_err(|e| Error::Other(format!("failed to build worker pool: {}", e)))?;
        pool.install(run)
    } else {
        run()
    };

    let report = BatchReport::new(outcomes);
    log::info!(
        "batch finished: {} parsed, {} failed",
        report.success_count(),
        report.failure_count()
    );
    Ok(report)
}

fn parse_one(
    parser: &ResumeParser,
    path: &Path,
    events: Option<&Sender<BatchEvent>>,
) -> BatchOutcome {
    let notify = |event: BatchEvent| {
        if let Some(tx) = events {
            let _ = tx.send(event);
        }
    };

    notify(BatchEvent::Started {
        path: path.to_path_buf(),
    });

    let result = panic::catch_unwind(AssertUnwindSafe(|| parser.parse_file(path)))
        .unwrap_or_else(|_| Err(Error::Other("parser panicked".to_string())));

    match &result {
        Ok(_) => notify(BatchEvent::Finished {
            path: path.to_path_buf(),
        }),
        Err(e) => {
            if e.is_fatal_input() {
                log::warn!("{}: {}", path.display(), e);
            } else {
                log::error!("{}: {}", path.display(), e);
            }
            notify(BatchEvent::Failed {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
        }
    }

    BatchOutcome {
        path: path.to_path_buf(),
        result,
    }
}
