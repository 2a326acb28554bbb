#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod load;
mod parse;
mod terminal;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use crate::config::{Config, OutputFormat};
use parse::MenuCatalog;

pub use error::{Error, Result};

const PROMPT: &str = "Find Name of Dishes (or) Dishes of Sides";

fn main() -> ExitCode {
    pretty_env_logger::init();
    match run(&Config::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            log::debug!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    log::debug!("{config:?}");
    let palette = config.color.palette();

    let document = load::load_document(&config.html_path)?;
    let catalog = MenuCatalog::from_html_element(document.root_element(), config.extraction)?;
    if catalog.is_empty() {
        log::warn!(
            "no menu items found in {}, every search will come up empty",
            config.html_path.display()
        );
    } else {
        log::debug!(
            "extracted {} menu items ({} extraction)",
            catalog.len(),
            config.extraction
        );
    }
    for entry in &catalog {
        log::trace!("{entry:?}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", palette.prompt(PROMPT))?;
    out.flush()?;

    let search = read_search(io::stdin().lock())?;
    let reported = match config.format {
        OutputFormat::Text => catalog.search_and_report(&search, &mut out, palette)?,
        OutputFormat::Json => catalog.search_and_report_json(&search, &mut out)?,
    };
    log::debug!("reported {reported} menu items for {search:?}");
    out.flush()?;
    Ok(())
}

/// one line, without the trailing newline. end of input reads as the empty search
fn read_search(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end().to_owned())
}
