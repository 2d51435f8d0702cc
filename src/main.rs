use clap::Parser;
use miette::Result;
use mjtile::cli::{Cli, Commands};
use mjtile::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);
    let manifest = cli.load_manifest(&printer)?;

    match cli.command {
        Commands::Parse(args) => mjtile::cli::parse::run(args, &manifest, &printer)?,
        Commands::Position(args) => mjtile::cli::position::run(args, &manifest)?,
        Commands::Validate(args) => mjtile::cli::validate::run(args, &manifest, &printer)?,
        Commands::Completions(args) => mjtile::cli::completions::run(args)?,
    }

    Ok(())
}
