use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::{init_logging, Printer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Hex(args) => swatch::cli::hex::run(args, &printer)?,
        Commands::Pick(args) => swatch::cli::pick::run(args, &printer)?,
        Commands::Gradient(args) => swatch::cli::gradient::run(args, &printer)?,
        Commands::Fill(args) => swatch::cli::fill::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
