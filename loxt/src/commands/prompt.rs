//! Interactive prompt.
//!
//! Each input line is scanned on its own, so line numbers in diagnostics
//! always read `line 1`. Errors are printed and the session carries on; it
//! ends at end of input.

use std::io::{self, BufRead, Write};

use loxc_lex::Lexer;
use loxc_util::{Handler, SourceMap};
use tracing::debug;

use crate::commands::render::{write_diagnostic, write_tokens};
use crate::config::OutputFormat;
use crate::error::Result;

/// Prompt shown before each line.
pub const PROMPT: &str = "> ";

/// Arguments for the prompt command.
#[derive(Debug, Clone)]
pub struct PromptArgs {
    /// Token output format.
    pub format: OutputFormat,
    /// Print the EOF token after each line.
    pub show_eof: bool,
    /// Print source snippets under diagnostics.
    pub snippets: bool,
}

/// Runs the prompt on the process's stdin, stdout and stderr.
pub fn run_prompt(args: PromptArgs) -> Result<()> {
    let lines = run_session(io::stdin().lock(), &mut io::stdout(), &mut io::stderr(), &args)?;
    debug!(lines, "prompt session ended");
    Ok(())
}

/// Reads lines from `input` until it is exhausted, scanning each one.
///
/// Returns the number of lines scanned.
pub fn run_session<R, W, E>(input: R, out: &mut W, err: &mut E, args: &PromptArgs) -> Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();
    let mut count = 0;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        count += 1;

        let mut sources = SourceMap::new();
        let file_id = sources.add("<prompt>", line.as_str());
        let mut handler = Handler::new();
        let tokens = Lexer::new(&line, &mut handler)
            .with_file(file_id)
            .scan_tokens();

        write_tokens(out, &tokens, args.format, args.show_eof)?;
        for diagnostic in handler.take_diagnostics() {
            write_diagnostic(err, &diagnostic, &sources, args.snippets)?;
        }
    }

    // Leave the terminal on a fresh line after the final prompt.
    writeln!(out)?;
    Ok(count)
}
