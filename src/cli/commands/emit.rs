//! Emit command - Print the providers protocol document

use std::io::Write;

use crate::cli::exit_codes;
use crate::cli::output::JsonFormat;
use crate::cli::Cli;
use crate::error::GheError;
use crate::providers::github::acquire_client;
use crate::providers::{ProvidersProtocol, PROVIDERS_V1};
use crate::utils::dump;

pub async fn execute(args: Cli) -> Result<i32, GheError> {
    // The factory runs before anything reaches stdout
    if args.connect {
        let client = acquire_client()?;
        tracing::debug!("Connected to {}", client.base_url());
    }

    let provider = ProvidersProtocol::ProvidersV1(PROVIDERS_V1);

    if args.dump {
        eprintln!("{}", dump(&provider)?);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit_providers(&mut out, &provider, &JsonFormat::default())?;

    Ok(exit_codes::SUCCESS)
}

/// Serialize `value` with `format` and write it to `out` followed by a newline
///
/// Nothing is written when serialization fails.
pub fn emit_providers<W: Write>(
    out: &mut W,
    value: &ProvidersProtocol,
    format: &JsonFormat,
) -> Result<(), GheError> {
    let mut text = format.render(value)?;
    text.push('\n');

    out.write_all(text.as_bytes())?;
    out.flush()?;

    tracing::debug!("Wrote {} document ({} bytes)", value.version_tag(), text.len());
    Ok(())
}
