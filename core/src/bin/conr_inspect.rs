//! Print the raw parameter text and parsed patterns of a callable declaration.
//!
//! Usage: `conr-inspect [--strict] [SIGNATURE]`; reads the declaration from stdin when omitted.

use conr::errors::ConrError;
use conr::pattern::{IdentifierSet, PatternParser};
use conr::signature::extract_with_form;
use serde_json::json;
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut identifiers = IdentifierSet::Extended;
    let mut source = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => identifiers = IdentifierSet::Strict,
            _ => source = Some(arg),
        }
    }

    let source = match source {
        Some(source) => source,
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    match inspect(&source, identifiers) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn inspect(source: &str, identifiers: IdentifierSet) -> Result<String, ConrError> {
    let (form, raw) = extract_with_form(source)?;
    log::debug!("extracted {:?} parameter text {:?}", form, raw);
    let patterns = PatternParser::new(identifiers).parse(raw)?;

    let report = json!({
        "form": format!("{:?}", form).to_lowercase(),
        "raw": raw,
        "patterns": patterns,
    });
    Ok(serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.to_string()))
}
