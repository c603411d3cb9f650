use crate::commands;
use crate::error_handling::*;
use crate::evaluating::evaluate;
use crate::formatting::format_number;
use crate::lexing::lex;
use crate::scanning::scan;

use std::io::{BufRead, Write};

const PROMPT: &str = ">> ";

fn is_exit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "exit" | "quit" | "q")
}

pub fn calculate(line: &str) -> Result<f64> {
    let fragments = scan(line);
    log::debug!("fragments: {:?}", fragments);
    let tokens = lex(&fragments)?;
    log::debug!("tokens: {:?}", tokens);
    evaluate(&tokens)
}

/// Output lines for one non-empty input line. Failures become a single
/// report line.
pub fn respond(line: &str) -> Vec<String> {
    let result = match commands::dispatch(line) {
        Some(result) => result,
        None => calculate(line).map(|value| vec![format_number(value)]),
    };
    result.unwrap_or_else(|e| vec![e.report()])
}

// Bytes that are not UTF-8 become U+FFFD, so a bad line is reported by the
// lexer instead of ending the session.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buffer = Vec::new();
    if input.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }
    match String::from_utf8(buffer) {
        Ok(line) => Ok(Some(line)),
        Err(e) => {
            log::warn!("input line is not valid UTF-8: {}", e.utf8_error());
            Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
        },
    }
}

fn write_banner<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "Math REPL")?;
    writeln!(output, "Available commands: {}", commands::names().join(", "))?;
    writeln!(output, "Type e.g. gcm%fe 12 18 30  or  fact%p 84 90")?;
    writeln!(output, "Or enter any expression. exit/quit/q to leave.")
}

pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> anyhow::Result<()> {
    write_banner(output)?;
    log::info!("session started");

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else { break };
        let line = line.trim();

        if is_exit(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        for response in respond(line) {
            writeln!(output, "{}", response)?;
        }
    }

    log::info!("session ended");
    Ok(())
}
