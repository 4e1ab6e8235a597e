//! Scan command implementation.
//!
//! Reads each input file, scans it, prints the tokens to stdout and the
//! diagnostics to stderr. Every file is scanned even when an earlier one had
//! lexical errors; the errors are totalled at the end.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use loxc_lex::Lexer;
use loxc_util::{Handler, SourceMap};
use tracing::{debug, info};

use crate::commands::render::{write_diagnostic, write_tokens};
use crate::config::OutputFormat;
use crate::error::{LoxtError, Result};

/// Arguments for the scan command.
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Files to scan, in order.
    pub files: Vec<PathBuf>,
    /// Token output format.
    pub format: OutputFormat,
    /// Print the final EOF token.
    pub show_eof: bool,
    /// Print source snippets under diagnostics.
    pub snippets: bool,
}

/// Runs the scan command against the process's stdout and stderr.
pub fn run_scan(args: ScanArgs) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();
    let result = scan_files(&args, &mut out, &mut err);
    out.flush()?;
    result
}

/// Scans every file in `args`, writing tokens to `out` and diagnostics to
/// `err`.
///
/// Fails with [`LoxtError::ScanFailed`] when any lexical error was reported
/// and with [`LoxtError::ReadSource`] as soon as a file cannot be read.
pub fn scan_files<W: Write, E: Write>(args: &ScanArgs, out: &mut W, err: &mut E) -> Result<()> {
    let mut sources = SourceMap::new();
    let mut errors = 0;

    for path in &args.files {
        let content: Arc<str> = fs::read_to_string(path)
            .map_err(|source| LoxtError::ReadSource {
                path: path.clone(),
                source,
            })?
            .into();
        let file_id = sources.add(path.display().to_string(), Arc::clone(&content));

        let mut handler = Handler::new();
        let tokens = Lexer::new(&content, &mut handler)
            .with_file(file_id)
            .scan_tokens();
        write_tokens(out, &tokens, args.format, args.show_eof)?;

        let file_errors = handler.error_count();
        for diagnostic in handler.take_diagnostics() {
            write_diagnostic(err, &diagnostic, &sources, args.snippets)?;
        }
        errors += file_errors;

        debug!(
            file = %path.display(),
            tokens = tokens.len(),
            errors = file_errors,
            "scanned file"
        );
    }

    if errors > 0 {
        info!(errors, files = args.files.len(), "scan reported errors");
        return Err(LoxtError::ScanFailed { errors });
    }
    Ok(())
}
