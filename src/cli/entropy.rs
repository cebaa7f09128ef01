use crate::cli::input::InputArgs;
use crate::config::resolve::resolve_config;
use crate::errors::Result;
use crate::metrics::entropy::EntropyReport;
use crate::output::OutputFormat;
use std::io::Write;

pub fn run(args: &InputArgs) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = resolve_config(&working_dir, &args.to_cli_overrides())?;
    let format = config.output_format()?;

    let hierarchy = args.load(&config)?;
    let relations = hierarchy.relations(&config);
    let report = EntropyReport::from_relations(&relations);

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            crate::output::text::write_entropy_text(&mut stdout, &report)?;
        }
        OutputFormat::Csv => {
            crate::output::text::write_entropy_csv(&mut stdout, &report)?;
        }
        OutputFormat::Json => {
            crate::output::json::write_entropy_json(&mut stdout, &report)?;
        }
        OutputFormat::Dot => {
            tracing::warn!("dot output has no entropy view, writing text instead");
            crate::output::text::write_entropy_text(&mut stdout, &report)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
