//! Batch coordination: discover documents and extract them in parallel.
//!
//! # Example
//!
//! ```no_run
//! use unresume::batch::{discover_documents, run_batch, BatchOptions};
//! use unresume::nlp::{LanguageModel, RuleBasedModel};
//! use unresume::PdfTextSource;
//!
//! fn main() -> unresume::Result<()> {
//!     let paths = discover_documents("resumes")?;
//!     let outcomes = run_batch(
//!         &paths,
//!         &PdfTextSource::new(),
//!         || Ok(Box::new(RuleBasedModel::new()?) as Box<dyn LanguageModel>),
//!         &BatchOptions::new().with_workers(4),
//!         None,
//!     )?;
//!     for outcome in &outcomes {
//!         println!("{}: {}", outcome.path.display(), outcome.is_ok());
//!     }
//!     Ok(())
//! }
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use walkdir::WalkDir;

use crate::assemble::{ExtractOptions, RecordAssembler};
use crate::error::{Error, Result};
use crate::nlp::LanguageModel;
use crate::record::ExtractedRecord;
use crate::source::TextSource;

/// Find every regular file under `root`, recursively, sorted by file name.
///
/// No extension filtering is done: anything that is not a valid document
/// fails later, in its own slot.
pub fn discover_documents<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root.as_ref())
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }

    log::info!(
        "Discovered {} documents under {}",
        paths.len(),
        root.as_ref().display()
    );
    Ok(paths)
}

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of worker threads
    pub workers: usize,
    /// Drop failed documents from the returned outcomes
    pub skip_failed: bool,
    /// Per-document extraction options
    pub extract: ExtractOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            skip_failed: false,
            extract: ExtractOptions::default(),
        }
    }
}

impl BatchOptions {
    /// Create batch options with one worker per available CPU.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count. Zero means one per available CPU.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = if workers == 0 {
            default_workers()
        } else {
            workers
        };
        self
    }

    /// Drop failed documents instead of keeping their error slots.
    pub fn with_skip_failed(mut self, skip: bool) -> Self {
        self.skip_failed = skip;
        self
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Progress notifications sent by workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// A worker picked up a document
    Started { index: usize, path: PathBuf },
    /// A worker finished a document
    Finished { index: usize, path: PathBuf, ok: bool },
}

/// The result slot for one discovered document.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Position in the submitted path list
    pub index: usize,
    /// Document path
    pub path: PathBuf,
    /// The extracted record, or why the document failed
    pub result: Result<ExtractedRecord>,
}

impl DocumentOutcome {
    /// Whether extraction succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The record, if extraction succeeded.
    pub fn record(&self) -> Option<&ExtractedRecord> {
        self.result.as_ref().ok()
    }

    /// The error, if extraction failed.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Load one document and extract its record.
///
/// A document that cannot be decoded fails as a whole; no partial record is
/// produced.
pub fn process_document(
    path: &Path,
    source: &dyn TextSource,
    assembler: &RecordAssembler,
) -> Result<ExtractedRecord> {
    let text = source.load_text(path)?;
    log::debug!(
        "Decoded {} ({} bytes) with {} source",
        path.display(),
        text.len(),
        source.name()
    );
    Ok(assembler.assemble(&text))
}

/// Extract every document in `paths` on a dedicated worker pool.
///
/// `paths` is split into one contiguous share per worker, and each share
/// builds a single [`RecordAssembler`] (and language model) from
/// `model_factory` before processing its documents. Outcomes come back in
/// submission order, one per path unless [`BatchOptions::skip_failed`] is set.
///
/// One assembler is built up front; if the model cannot be created the
/// batch fails before any document is touched.
pub fn run_batch<F>(
    paths: &[PathBuf],
    source: &dyn TextSource,
    model_factory: F,
    options: &BatchOptions,
    progress: Option<&Sender<BatchEvent>>,
) -> Result<Vec<DocumentOutcome>>
where
    F: Fn() -> Result<Box<dyn LanguageModel>> + Sync,
{
    let first = RecordAssembler::new(model_factory()?, options.extract.clone())?;
    let workers = options.workers.max(1);
    log::info!(
        "Extracting {} documents with {} workers (model: {})",
        paths.len(),
        workers,
        first.model_name()
    );
    drop(first);

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("unresume-worker-{}", i))
        .build()?;

    let notify = |event: BatchEvent| {
        if let Some(tx) = progress {
            // A dropped receiver only means nobody is watching.
            let _ = tx.send(event);
        }
    };

    let share = paths.len().div_ceil(workers).max(1);
    let shares: Vec<Vec<DocumentOutcome>> = pool.install(|| {
        paths
            .par_chunks(share)
            .enumerate()
            .map(|(worker, chunk)| {
                let assembler = model_factory()
                    .and_then(|model| RecordAssembler::new(model, options.extract.clone()));
                log::debug!("Worker share {} holds {} documents", worker, chunk.len());

                chunk
                    .iter()
                    .enumerate()
                    .map(|(offset, path)| {
                        let index = worker * share + offset;
                        notify(BatchEvent::Started {
                            index,
                            path: path.clone(),
                        });

                        let result = match &assembler {
                            Ok(assembler) => process_document(path, source, assembler),
                            Err(e) => {
                                Err(Error::WorkerPool(format!("worker setup failed: {}", e)))
                            }
                        };
                        if let Err(e) = &result {
                            log::warn!("Failed to extract {}: {}", path.display(), e);
                        }

                        notify(BatchEvent::Finished {
                            index,
                            path: path.clone(),
                            ok: result.is_ok(),
                        });
                        DocumentOutcome {
                            index,
                            path: path.clone(),
                            result,
                        }
                    })
                    .collect()
            })
            .collect()
    });
    let outcomes: Vec<DocumentOutcome> = shares.into_iter().flatten().collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    log::info!(
        "Batch finished: {} succeeded, {} failed",
        outcomes.len() - failed,
        failed
    );

    if options.skip_failed {
        Ok(outcomes.into_iter().filter(DocumentOutcome::is_ok).collect())
    } else {
        Ok(outcomes)
    }
}
