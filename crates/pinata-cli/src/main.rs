// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use pinata_app::{AppState, Catalog};
use pinata_tui::AppRuntime;
use runtime::DataRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `pinata --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;
    logging::init(&config)?;

    let mut runtime = if options.demo {
        DataRuntime::demo()
    } else {
        let source = config
            .catalog_source(options.data.as_deref())
            .context("resolve catalog source; pass --data or set [data].source")?;
        DataRuntime::new(source, config.timeout()?)
    };

    if options.check_only {
        let catalog = runtime.load_catalog().with_context(|| {
            format!(
                "load catalog {} -- if this source is wrong, pass --data or set [data].source",
                runtime.source_label()
            )
        })?;
        println!("{}", check_summary(&catalog, &runtime.source_label()));
        return Ok(());
    }

    let mut state = AppState::new(Catalog::default(), config.visibility());
    tracing::info!(source = %runtime.source_label(), "starting pinata");
    pinata_tui::run_app(&mut state, &mut runtime)
}

fn check_summary(catalog: &Catalog, source: &str) -> String {
    let unnamed = catalog
        .iter()
        .filter(|(_, item)| item.name().is_none())
        .count();
    if unnamed == 0 {
        format!("{} pinatas in {source}", catalog.len())
    } else {
        format!(
            "{} pinatas in {source} ({unnamed} without a Name)",
            catalog.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    data: Option<String>,
    print_config_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        data: None,
        print_config_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--data" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--data requires a file path or URL"))?;
                options.data = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("pinata: search and browse a pinata catalog");
    println!("  --config <path>          Use a specific config path");
    println!("  --data <path|url>        Load the catalog from this file or URL");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Browse the built-in demo catalog");
    println!("  --check                  Load config + catalog, print the item count, exit");
    println!("  --help                   Show this help");
}
