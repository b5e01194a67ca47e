//! Lineage Flow CLI
//!
//! Usage:
//!   lineage-flow [OPTIONS] [FILE]
//!
//! Reads a person-record JSON array (from FILE or stdin), computes the graph
//! layout, and prints the node/edge graph as JSON on stdout. With --select,
//! the output also carries the generation maps for that person.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use lineage_flow::{
    highlight, layout_with_config, Highlight, LayoutConfig, LayoutGraph, LayoutProfile,
};

#[derive(Parser)]
#[command(name = "lineage-flow")]
#[command(about = "Chronological graph layout for genealogical lineage data")]
struct Cli {
    /// Input JSON file with person records (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Use the mobile spacing preset
    #[arg(short, long)]
    mobile: bool,

    /// Layout profile file overriding spacing constants (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Person id to compute generation highlighting for
    #[arg(short, long)]
    select: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output {
    #[serde(flatten)]
    graph: LayoutGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlight: Option<Highlight>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let mut config = LayoutConfig::for_device(cli.mobile);
    if let Some(path) = &cli.profile {
        match LayoutProfile::from_file(path) {
            Ok(profile) => config = profile.apply(config),
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let people = match lineage_flow::people_from_json(&source) {
        Ok(people) => people,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let graph = layout_with_config(&people, &config);
    let selection = cli.select.as_deref().map(|id| highlight(id, &graph));
    let output = Output {
        graph,
        highlight: selection,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!("lineage-flow - chronological graph layout for lineage data");
    println!();
    println!("Reads a JSON array of person records and prints the laid-out graph.");
    println!();
    println!("Usage:");
    println!("  lineage-flow people.json");
    println!("  cat people.json | lineage-flow --mobile");
    println!("  lineage-flow people.json --select adam --pretty");
    println!();
    println!("Run with --help for all options.");
}
