use clap::Parser;
use colored::*;
use faunagen::config::FaunagenConfig;
use faunagen::error::{FaunagenError, Result};
use faunagen::filter;
use faunagen::model::Animal;
use faunagen::page;
use faunagen::render;
use faunagen::source::{ApiSource, FileSource, RecordSource};
use faunagen::template;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = FaunagenConfig::load(&cwd).unwrap_or_default();

    // File mode takes the name as an optional query label; API mode needs
    // one and prompts when it is absent.
    let (source, query): (Box<dyn RecordSource>, Option<String>) = match &cli.file {
        Some(path) => (Box::new(FileSource::new(path)), cli.name.clone()),
        None => {
            let api_key = std::env::var("API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .ok_or(FaunagenError::ApiKeyMissing)?;
            let name = match cli.name.clone() {
                Some(name) => name,
                None => ask_animal_name()?,
            };
            (
                Box::new(ApiSource::new(config.api_url.as_str(), api_key)?),
                Some(name),
            )
        }
    };

    let animals = source.fetch(query.as_deref().unwrap_or(""))?;

    let filter_key = cli
        .characteristic
        .unwrap_or_else(|| config.filter_key.clone());
    let filter_value = if cli.no_filter || animals.is_empty() {
        String::new()
    } else if let Some(value) = cli.filter {
        value
    } else {
        ask_filter_value(&animals, &filter_key)?
    };

    let fragment = page::build_fragment(animals, query.as_deref(), &filter_key, &filter_value)?;

    let template_path = cli
        .template
        .unwrap_or_else(|| PathBuf::from(&config.template_path));
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));

    let page_template = template::read_template(&template_path)?;
    let injected = template::inject(&page_template, template::PLACEHOLDER, &fragment);
    if !injected.replaced {
        eprintln!(
            "{}",
            format!(
                "Warning: {} does not contain the placeholder {}",
                template_path.display(),
                template::PLACEHOLDER
            )
            .yellow()
        );
    }
    template::write_page(&output_path, &injected.html)?;

    println!(
        "{}",
        format!("Wrote {}", output_path.display()).green()
    );
    Ok(())
}

/// Prompt for the animal name to look up. Loops until the trimmed input is
/// at least two characters.
fn ask_animal_name() -> Result<String> {
    loop {
        print!("Enter animal name: ");
        io::stdout().flush()?;
        let input = read_line()?.ok_or_else(|| {
            FaunagenError::Input("no animal name provided".to_string())
        })?;
        let input = input.trim();
        if input.chars().count() >= 2 {
            return Ok(input.to_string());
        }
        println!("Expected a name with at least 2 characters.");
    }
}

/// Prompt for the filter value. Shows the values actually present in the
/// data (plus "Not specified" when some record lacks the key), normalizes
/// the input, and resolves it case-insensitively to the stored spelling so
/// oddly-cased data values still filter. Blank input means no filter;
/// anything unrecognized re-prompts.
fn ask_filter_value(animals: &[Animal], key: &str) -> Result<String> {
    let choices = filter::known_values(animals, key);
    loop {
        println!("Possible values for {}:", render::display_label(key));
        for choice in &choices {
            println!("\t{}", choice);
        }
        print!("Filter by {} (leave blank for no filter): ", key);
        io::stdout().flush()?;

        let input = match read_line()? {
            Some(line) => normalize_choice(&line),
            // stdin closed: behave like "no filter" rather than looping
            None => return Ok(String::new()),
        };
        if input.is_empty() {
            return Ok(String::new());
        }
        if let Some(stored) = choices.iter().find(|c| c.eq_ignore_ascii_case(&input)) {
            return Ok(stored.clone());
        }
        println!("{}", format!("There is no value \"{}\".\n", input).yellow());
    }
}

/// Trim, lowercase, capitalize: "fUR " -> "Fur".
fn normalize_choice(input: &str) -> String {
    let trimmed = input.trim().to_lowercase();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One line from stdin; None on EOF.
fn read_line() -> Result<Option<String>> {
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
