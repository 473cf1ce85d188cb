// ABOUTME: Main entry point for the deckconv program.
// ABOUTME: Provides CLI interface and executes the conversion pipeline.

use clap::Parser;
use deckconv::config::SECTION_HEADING;
use deckconv::{Config, SectionStatus, bootstrap, convert, readme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the presentation decks
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    println!("== PPTX -> HTML + PDF batch conversion ==");
    let config = Config::new(cli.dir);

    match run_pipeline(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_pipeline(config: &Config) -> deckconv::Result<()> {
    let converter = bootstrap::ensure_environment(config)?;

    convert::clean_stray_outputs(config)?;
    convert::convert_all(config, &converter)?;
    println!("Conversions complete.");

    let readme_path = config.readme_path();
    match readme::update_readme(config)? {
        SectionStatus::Rewritten => {
            println!(
                "Updated {} ({} rewritten).",
                readme_path.display(),
                SECTION_HEADING
            );
        }
        SectionStatus::Added => {
            println!(
                "Added {} ({} added).",
                readme_path.display(),
                SECTION_HEADING
            );
        }
    }

    Ok(())
}
