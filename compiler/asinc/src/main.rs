//! Asin interpreter CLI

use std::process::ExitCode;

use asin_diagnostic::emitter::ColorMode;
use asinc::commands::{lex_file, parse_file, run_program};

fn main() -> ExitCode {
    asinc::init_tracing();

    let mut color = ColorMode::Auto;
    let mut args: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                eprintln!("error: invalid --color value '{value}' (expected auto, always or never)");
                return ExitCode::FAILURE;
            };
            color = mode;
        } else {
            args.push(arg);
        }
    }

    let Some(command) = args.first() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" | "lex" | "parse" => {
            let Some(path) = args.get(1) else {
                eprintln!("Usage: asin {command} <file.asin>");
                return ExitCode::FAILURE;
            };
            match command.as_str() {
                "lex" => lex_file(path, color),
                "parse" => parse_file(path, color),
                _ => run_program(path, color),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-v" => {
            println!("Asin {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        // Anything else that is not a flag is taken as a program path.
        path if !path.starts_with('-') => run_program(path, color),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Asin, a tree-walking interpreter with Tagalog keywords");
    println!();
    println!("Usage: asin <command> [options]");
    println!("       asin <file.asin>");
    println!();
    println!("Commands:");
    println!("  run <file.asin>      Run an Asin program");
    println!("  lex <file.asin>      Tokenize and display tokens");
    println!("  parse <file.asin>    Parse and display the syntax tree");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  ASIN_LOG=<filter>    Enable tracing, e.g. ASIN_LOG=asin_eval=debug");
    println!("  ASIN_LOG_TREE=1      Render traces as an indented span tree");
    println!();
    println!("Examples:");
    println!("  asin main.asin");
    println!("  asin run main.asin --color=never");
    println!("  asin lex main.asin");
}
