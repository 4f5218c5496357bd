// Copyright 2021-2025, Collabora, Ltd.
//
// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::path::PathBuf;

use clap::{crate_authors, crate_description, Parser, Subcommand};
use itertools::Itertools;
use manuscript_dates::{DateSource, Normalizer, Settings};
use production_dates::Era;

#[derive(Parser, Debug)]
#[command(author=crate_authors!(), version, about=crate_description!())]
struct Args {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Separator between the two years of a range, overriding the settings file
    #[arg(short, long)]
    separator: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode MARC 008 fields: either the whole field or just its nine-character date block
    Marc {
        /// Subfield codes of the record's 046 field, such as "be" when $b and $e are
        /// present: $d or $e gives the era of the second date of a BCE date
        #[arg(long = "subfields-046", value_name = "CODES", default_value = "")]
        subfields_046: String,

        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Use separately recorded earliest and latest years
    Pair { start: String, end: String },

    /// Read free-text date phrases, such as "circa 18th-20th century"
    Text {
        #[arg(required = true)]
        phrases: Vec<String>,
    },

    /// Derive centuries and AAT terms for an already normalized range string
    Centuries { range: String },
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match args.config {
        Some(filename) => {
            eprintln!("Opening {}", filename.display());
            Settings::load(&filename)?
        }
        None => Settings::default(),
    };
    if let Some(separator) = args.separator {
        settings.range_separator = separator;
    }
    let normalizer = Normalizer::from_settings(&settings)?;

    let normalized = match args.command {
        Command::Marc {
            subfields_046,
            fields,
        } => {
            let end_era = Era::end_era_from_046(subfields_046.chars());
            let sources = fields
                .into_iter()
                .map(|field| DateSource::Marc008 { field, end_era })
                .collect_vec();
            normalizer.normalize(&sources)
        }
        Command::Pair { start, end } => normalizer.normalize(&[DateSource::StartEnd { start, end }]),
        Command::Text { phrases } => {
            let sources = phrases.into_iter().map(DateSource::FreeText).collect_vec();
            normalizer.normalize(&sources)
        }
        Command::Centuries { range } => normalizer.normalize_range_string(&range),
    };
    println!("{normalized}");
    Ok(())
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert()
}
