use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use velvet_core::Options;

#[derive(Parser)]
#[command(name = "velvet", version, about = "Velvet template renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a .vx component to HTML.
    Render {
        /// Path to the root .vx file
        input: PathBuf,
        /// JSON object merged over the component's own data
        #[arg(long)]
        data: Option<PathBuf>,
        /// Child component, registered under its file stem (repeatable)
        #[arg(long = "component", short = 'c')]
        components: Vec<PathBuf>,
        /// Fail on conditionals whose field is missing
        #[arg(long)]
        strict: bool,
        /// Do not HTML-escape interpolated values
        #[arg(long)]
        no_escape: bool,
        /// Skip interpolation and print directive-resolved markup
        #[arg(long)]
        raw: bool,
        /// Output file (default: stdout)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(velvet_cli::log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            input,
            data,
            components,
            strict,
            no_escape,
            raw,
            out,
        } => {
            let options = Options::new()
                .strict_conditionals(strict)
                .escape_html(!no_escape)
                .interpolate(!raw);
            velvet_cli::render_cmd(&input, data.as_deref(), &components, options, out.as_deref())?
        }
    }
    Ok(())
}
