use crate::cli::input::InputArgs;
use crate::config::resolve::resolve_config;
use crate::errors::Result;
use crate::output::OutputFormat;
use std::io::Write;

pub fn run(args: &InputArgs) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = resolve_config(&working_dir, &args.to_cli_overrides())?;
    let format = config.output_format()?;

    let hierarchy = args.load(&config)?;
    let relations = hierarchy.relations(&config);

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            crate::output::text::write_relations_table(&mut stdout, &relations, '\t')?;
        }
        OutputFormat::Csv => {
            crate::output::text::write_relations_table(&mut stdout, &relations, ',')?;
        }
        OutputFormat::Json => {
            crate::output::json::write_relations_json(&mut stdout, &relations)?;
        }
        OutputFormat::Dot => {
            crate::output::dot::write_dot(&mut stdout, &relations)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
