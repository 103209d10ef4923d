use anyhow::Context;
use clap::Parser;
use small_cron::core::report::join_values;
use small_cron::utils::logger;
use small_cron::{FieldKind, FieldParser, OutputFormat};

#[derive(Parser)]
#[command(name = "expand-field")]
#[command(about = "Expand a single cron field expression")]
struct Args {
    /// Which field the expression belongs to
    #[arg(short, long, value_enum)]
    kind: FieldKind,

    /// Field expression, e.g. "1,2,10-25/5" or "jan-mar"
    expression: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose, None);

    let range = args.kind.range();
    tracing::info!(
        "Expanding {} field ({}-{})",
        args.kind.label(),
        range.min,
        range.max
    );

    let values = FieldParser::for_kind(args.kind)
        .parse(&args.expression)
        .with_context(|| {
            format!(
                "failed to expand {} expression '{}'",
                args.kind.label(),
                args.expression
            )
        })?;

    match args.format {
        OutputFormat::Text => println!("{}", join_values(&values)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&values)?),
    }

    Ok(())
}
