// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::core::models::{DEFAULT_LOG_FILE, RunnerOptions};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// Both the `--lang <VALUE>` and the `--lang=<VALUE>` forms are accepted,
/// matching what clap itself parses later.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    for (pos, arg) in args.iter().enumerate() {
        if arg == "--lang" {
            if let Some(lang) = args.get(pos + 1) {
                return lang.clone();
            }
        } else if let Some(lang) = arg.strip_prefix("--lang=") {
            if !lang.is_empty() {
                return lang.to_string();
            }
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(t!("cli.arg_output", locale = locale).to_string())
                .value_name("LOG_FILE")
                .default_value(DEFAULT_LOG_FILE)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("folder")
                .short('f')
                .long("folder")
                .help(t!("cli.arg_folder", locale = locale).to_string())
                .value_name("FOLDER")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("data-path")
                .short('d')
                .long("data-path")
                .help(t!("cli.arg_data_path", locale = locale).to_string())
                .value_name("DATA_PATH")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("user-resource-path")
                .short('u')
                .long("user-resource-path")
                .help(t!("cli.arg_resource_path", locale = locale).to_string())
                .value_name("RESOURCE_PATH")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .help(t!("cli.arg_include", locale = locale).to_string())
                .value_name("TESTS")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help(t!("cli.arg_exclude", locale = locale).to_string())
                .value_name("TESTS")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("shuffle")
                .long("shuffle")
                .help(t!("cli.arg_shuffle", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

/// Splits repeatable, comma-separated option groups into individual suite
/// names. `-i one -i two,three` becomes `[one, two, three]`.
fn flatten_groups(groups: Vec<String>) -> Vec<String> {
    groups
        .iter()
        .flat_map(|group| group.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    let log_path = matches
        .get_one::<PathBuf>("output")
        .unwrap() // Has default
        .clone();
    let folder = matches
        .get_one::<PathBuf>("folder")
        .unwrap() // Has default
        .clone();

    let mut options = RunnerOptions::new(folder);
    options.log_path = log_path;
    options.data_path = matches.get_one::<String>("data-path").cloned();
    options.resource_path = matches.get_one::<String>("user-resource-path").cloned();

    let include = flatten_groups(
        matches
            .get_many::<String>("include")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    );
    let exclude = flatten_groups(
        matches
            .get_many::<String>("exclude")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    );
    let shuffle = matches.get_flag("shuffle");

    commands::run::execute(options, include, exclude, shuffle, &language).await
}
