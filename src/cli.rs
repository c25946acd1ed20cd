//! Command-line interface implementation for Blueprint.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Blueprint.
#[derive(Parser, Debug)]
#[command(author, version, about = "Blueprint: materialize reusable folder structures on disk", long_about = None)]
pub struct Args {
    /// Path to the structure file describing the project layout
    #[arg(value_name = "STRUCTURE_FILE")]
    pub structure: PathBuf,

    /// Name of the project folder to create
    #[arg(value_name = "PROJECT_NAME")]
    pub name: String,

    /// Existing directory the project folder is created in
    #[arg(value_name = "DESTINATION_DIR")]
    pub destination: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
