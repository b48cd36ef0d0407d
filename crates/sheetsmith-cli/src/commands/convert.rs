//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use sheetsmith_domain::{LlmProvider, UploadedDocument};
use sheetsmith_extractor::{Conversion, ExtractorConfig, ExtractorError, TableExtractor};
use sheetsmith_llm::GeminiProvider;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Execute the convert command.
pub async fn execute_convert(args: ConvertArgs, formatter: &Formatter) -> Result<()> {
    let mut config = ExtractorConfig::for_profile(args.profile.into());
    if args.no_timeout {
        config = config.with_timeout(None);
    } else if let Some(secs) = args.timeout {
        config = config.with_timeout(Some(Duration::from_secs(secs)));
    }
    config.validate().map_err(ExtractorError::Config)?;

    let mut provider = GeminiProvider::from_env();
    if let Some(model) = args.model {
        provider = provider.with_model(model);
    }
    if let Some(endpoint) = args.endpoint {
        provider = provider.with_endpoint(endpoint);
    }

    let extractor = TableExtractor::new(provider, config);
    let (conversion, output) =
        run_conversion(&extractor, &args.input, args.output.as_deref()).await?;

    println!("{}", formatter.format_conversion(&conversion, &output)?);
    Ok(())
}

/// Convert a local PDF and write the workbook.
///
/// Without an explicit output the workbook lands next to the input. Writing
/// over the input file itself is refused before the provider is called.
/// Returns the conversion and the path written.
pub async fn run_conversion<L>(
    extractor: &TableExtractor<L>,
    input: &Path,
    output: Option<&Path>,
) -> Result<(Conversion, PathBuf)>
where
    L: LlmProvider + Send + Sync + 'static,
{
    let max = extractor.config().max_document_bytes;
    let size = fs::metadata(input)?.len();
    if size > max as u64 {
        return Err(ExtractorError::DocumentTooLarge(size as usize, max).into());
    }

    let mut document = UploadedDocument::pdf(fs::read(input)?);
    if let Some(name) = input.file_name().and_then(|n| n.to_str()) {
        document = document.with_file_name(name);
    }

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(document.workbook_file_name()),
    };
    if is_same_file(input, &output) {
        return Err(CliError::InvalidInput(format!(
            "Output {} would overwrite the input file; choose another path with --output",
            output.display()
        )));
    }

    info!("Converting {} ({} bytes)", input.display(), document.size());
    let conversion = extractor.convert(&document).await?;
    fs::write(&output, &conversion.bytes)?;

    Ok((conversion, output))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
