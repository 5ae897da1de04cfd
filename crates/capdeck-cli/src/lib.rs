//! CLI logic for the CapDeck renderer.

mod args;
mod config;

pub use args::Args;

use log::info;

use capdeck::{Deck, DeckError};

/// Run the CapDeck CLI application
///
/// This renders the standard seven-page deck and writes the resulting PDF to
/// the output path, printing a short completion summary to standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DeckError` for:
/// - Configuration loading errors
/// - Page composition errors
/// - PDF conversion errors
/// - Output write errors
pub fn run(args: &Args) -> Result<(), DeckError> {
    info!(output_path = args.output; "Rendering CapNet architecture deck");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Compose, render, and write the deck
    let deck = Deck::new(app_config);
    let summary = deck.write_pdf(&args.output)?;

    println!("Generated: {}", summary.path().display());
    println!("Pages: {}", summary.page_count());

    Ok(())
}
