//! Rendering of tokens and diagnostics.

use std::io::Write;

use loxc_lex::Token;
use loxc_util::{Diagnostic, SourceMap};
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::Result;

/// Writes a token stream in the requested format.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
    show_eof: bool,
) -> Result<()> {
    let visible = tokens.iter().filter(|token| show_eof || !token.is_eof());
    match format {
        OutputFormat::Text => {
            for token in visible {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            let tokens: Vec<&Token> = visible.collect();
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

/// Writes one diagnostic, optionally followed by the source line it points
/// at:
///
/// ```text
/// [line 2] Error: Unexpected character.
///   --> demo.lox:2 [E1001]
///    |
///  2 | var @ = 1;
///    |     ^
///    = note: found '@'
/// ```
pub fn write_diagnostic<W: Write>(
    out: &mut W,
    diagnostic: &Diagnostic,
    sources: &SourceMap,
    snippets: bool,
) -> Result<()> {
    writeln!(out, "{}", diagnostic)?;
    if !snippets {
        return Ok(());
    }

    let span = diagnostic.span;
    let Some(file) = sources.get(span.file_id) else {
        return Ok(());
    };
    let gutter = span.line.to_string().len();
    let code = diagnostic
        .code
        .map(|code| format!(" [{}]", code))
        .unwrap_or_default();
    writeln!(out, "{:>gutter$}--> {}:{}{}", "", file.name(), span.line, code)?;

    match sources.line_text(span) {
        Ok(text) => {
            let line_start = file.line_start(span.line as usize).unwrap_or_default();
            // A lexeme that began on an earlier line is underlined from
            // column 0.
            let from = span.start.saturating_sub(line_start).min(text.len());
            let to = span.end.saturating_sub(line_start).clamp(from, text.len());
            let indent = text[..from].chars().count();
            let carets = text[from..to].chars().count().max(1);

            writeln!(out, "{:>gutter$} |", "")?;
            writeln!(out, "{} | {}", span.line, text)?;
            writeln!(
                out,
                "{:>gutter$} | {}{}",
                "",
                " ".repeat(indent),
                "^".repeat(carets)
            )?;
        },
        Err(err) => debug!(%err, "no source line for diagnostic"),
    }

    for note in &diagnostic.notes {
        writeln!(out, "{:>gutter$} = note: {}", "", note)?;
    }
    for help in &diagnostic.helps {
        writeln!(out, "{:>gutter$} = help: {}", "", help)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_lex::{Lexer, Literal, TokenKind};
    use loxc_util::Handler;

    fn render_tokens(tokens: &[Token], format: OutputFormat, show_eof: bool) -> String {
        let mut out = Vec::new();
        write_tokens(&mut out, tokens, format, show_eof).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Number, "1", Some(Literal::Number(1.0)), 1),
            Token::eof(1),
        ]
    }

    #[test]
    fn test_text_tokens() {
        assert_eq!(
            render_tokens(&sample_tokens(), OutputFormat::Text, true),
            "NUMBER 1 1.0\nEOF  null\n"
        );
        assert_eq!(
            render_tokens(&sample_tokens(), OutputFormat::Text, false),
            "NUMBER 1 1.0\n"
        );
    }

    #[test]
    fn test_json_tokens() {
        let json = render_tokens(&sample_tokens(), OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "kind": "NUMBER", "lexeme": "1", "literal": { "Number": 1.0 }, "line": 1 }
            ])
        );
    }

    fn diagnostics_for(source: &str) -> (SourceMap, Vec<Diagnostic>) {
        let mut sources = SourceMap::new();
        let id = sources.add("demo.lox", source);
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).with_file(id).scan_tokens();
        (sources, handler.take_diagnostics())
    }

    #[test]
    fn test_diagnostic_with_snippet() {
        let (sources, diagnostics) = diagnostics_for("print 1;\nvar @ = 1;");
        let mut out = Vec::new();
        write_diagnostic(&mut out, &diagnostics[0], &sources, true).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[line 2] Error: Unexpected character.\n \
             --> demo.lox:2 [E1001]\n  \
             |\n\
             2 | var @ = 1;\n  \
             |     ^\n  \
             = note: found '@'\n"
        );
    }

    #[test]
    fn test_diagnostic_without_snippet() {
        let (sources, diagnostics) = diagnostics_for("#");
        let mut out = Vec::new();
        write_diagnostic(&mut out, &diagnostics[0], &sources, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[line 1] Error: Unexpected character.\n"
        );
    }

    #[test]
    fn test_unterminated_string_underlines_last_line() {
        let (sources, diagnostics) = diagnostics_for("x = \"ab\ncd");
        let mut out = Vec::new();
        write_diagnostic(&mut out, &diagnostics[0], &sources, true).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.starts_with("[line 2] Error: Unterminated string.\n"));
        assert!(rendered.contains("2 | cd\n  | ^^\n"));
        assert!(rendered.contains("= help: add a closing `\"`"));
    }
}
