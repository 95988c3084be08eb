//! Pox Language CLI
//!
//! Command-line front end: scans and parses Pox scripts and prints the
//! resulting tokens or syntax tree.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use pox_lang::error::Diagnostic;
use pox_lang::parser::Associativity;
use pox_lang::{parse_source_with, ConsoleReporter, Lexer, ParserOptions, PoxError, VERSION};

const EXIT_USAGE: i32 = 64;
const EXIT_DATA: i32 = 65;
const EXIT_IO: i32 = 74;

fn main() {
    env_logger::init();

    let mut show_tokens = false;
    let mut show_help = false;
    let mut show_version = false;
    let mut options = ParserOptions::default();
    let mut filename: Option<String> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" | "-t" => show_tokens = true,
            // printing the AST is the default action
            "--ast" | "-a" => {}
            "--left-factor" => options.factor_associativity = Associativity::Left,
            "--help" | "-h" => show_help = true,
            "--version" | "-V" => show_version = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(EXIT_USAGE);
            }
            _ if filename.is_some() => {
                eprintln!("Only one script may be given");
                print_usage();
                process::exit(EXIT_USAGE);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if show_version {
        println!("pox {}", VERSION);
        return;
    }

    let Some(file) = filename else {
        println!("Pox v{} - Parser REPL", VERSION);
        println!("Type 'exit' to quit\n");
        repl(options);
        return;
    };

    let source = match fs::read_to_string(&file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read file '{}': {}", file, e);
            process::exit(EXIT_IO);
        }
    };

    let code = if show_tokens {
        show_file_tokens(&file, &source)
    } else {
        show_file_ast(&file, &source, options)
    };

    if code != 0 {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: pox [OPTIONS] [script]");
    eprintln!("       pox --help");
}

fn print_help() {
    println!("Pox v{} - Scanner and parser for the Pox language", VERSION);
    println!();
    println!("USAGE:");
    println!("    pox [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -t, --tokens      Show tokenization output (lexer only)");
    println!("    -a, --ast         Show the parsed syntax tree (default)");
    println!("        --left-factor Parse '*' and '/' chains left-associatively");
    println!("    -h, --help        Show this help message");
    println!("    -V, --version     Show version");
    println!();
    println!("EXAMPLES:");
    println!("    pox script.pox            Parse a script and print its tree");
    println!("    pox --tokens script.pox   Show tokens from lexer");
    println!("    pox                       Start interactive REPL");
    println!();
    println!("Set RUST_LOG=debug to trace parser recovery.");
}

/// Show tokens from lexing a file
fn show_file_tokens(filename: &str, source: &str) -> i32 {
    let mut lexer = Lexer::new(source, Some(filename));
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => return report_lexer_error(e, source),
    };

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!("{:4}: {}", i, token);
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    0
}

/// Parse a file and print one prefix-form line per statement
fn show_file_ast(filename: &str, source: &str, options: ParserOptions) -> i32 {
    let mut reporter = ConsoleReporter::with_source(source);

    let ast = match parse_source_with(source, Some(filename), options, &mut reporter) {
        Ok(ast) => ast,
        Err(e) => return report_lexer_error(e, source),
    };

    print!("{}", ast);

    if reporter.had_error() {
        eprintln!("{} parse error(s)", reporter.error_count());
        EXIT_DATA
    } else {
        0
    }
}

fn report_lexer_error(error: PoxError, source: &str) -> i32 {
    eprint!("{}", Diagnostic::with_source(error, source));
    EXIT_DATA
}

/// Start an interactive REPL that prints the tree for each line
fn repl(options: ParserOptions) {
    let mut line_number = 1;
    let mut reporter = ConsoleReporter::with_source("");

    loop {
        print!("pox:{} > ", line_number);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                reporter.reset(input);
                match parse_source_with(input, Some("<repl>"), options, &mut reporter) {
                    Ok(ast) => print!("{}", ast),
                    Err(e) => eprint!("{}", Diagnostic::with_source(e, input)),
                }
                if reporter.had_error() {
                    eprintln!("{} parse error(s)", reporter.error_count());
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
