use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "minicss")]
#[command(about = "Parse a style sheet and print its canonical form")]
struct Args {
    /// Style sheet to parse.
    input: PathBuf,

    /// Only report the number of rules.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG wins over the default level
    let _logger = flexi_logger::Logger::with_env_or_str("info").start()?;

    let args = Args::parse();

    let source = fs::read_to_string(&args.input)?;
    let start_instant = Instant::now();

    let stylesheet = match minicss::parse(&source) {
        Ok(stylesheet) => stylesheet,
        Err(e) => {
            let (line, column) = e.line_and_column(&source);
            error!("{}:{}:{}: {}", args.input.display(), line, column, e);
            std::process::exit(1);
        }
    };

    info!(
        "Parsed {} rules from {} in {:.2?}.",
        stylesheet.rules.len(),
        args.input.display(),
        start_instant.elapsed()
    );

    if !args.quiet {
        print!("{}", stylesheet);
    }

    Ok(())
}
