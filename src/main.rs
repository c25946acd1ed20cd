//! Blueprint's main application entry point and orchestration logic.
//! Parses a structure file into a blueprint, wraps it as a template and
//! materializes it under the requested destination.

use std::fs;

use blueprint::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    materializer::Materializer,
    model::Template,
    parser::parse,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads and parses the structure file into a blueprint tree
/// 2. Wraps the tree under a synthetic container root
/// 3. Materializes the template as `destination/name`
fn run(args: Args) -> Result<()> {
    let text = fs::read_to_string(&args.structure)?;
    let root = parse(&text)?;

    let template_name = args
        .structure
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("blueprint")
        .to_string();
    let template = Template::from_items(template_name, vec![root]);

    let project_root =
        Materializer::new().materialize(&template, &args.name, &args.destination)?;

    println!("Project created successfully in {}.", project_root.display());
    Ok(())
}
