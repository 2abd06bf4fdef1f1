//! Command-line interface for initext
//! This binary is the file-I/O collaborator around the core library: it reads
//! INI text from disk, parses it, and prints the document in various formats.
//!
//! Usage:
//!   initext print `<path>`                           - Parse and re-serialize an INI file
//!   initext convert `<path>` [--format `<format>`]     - Convert to json, yaml, or ini
//!   initext get `<path>` `<key>` [--section `<name>`]    - Print a single property value

use clap::{Arg, Command};

use initext::ini::{parse_text, serialize, Document};

fn main() {
    let matches = Command::new("initext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting INI files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("print")
                .about("Parse a file and print the re-serialized document")
                .arg(
                    Arg::new("path")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a file to another representation")
                .arg(
                    Arg::new("path")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('ini', 'json', or 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Print the raw value of a single property")
                .arg(
                    Arg::new("path")
                        .help("Path to the INI file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("key")
                        .help("Property key to look up")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("section")
                        .long("section")
                        .short('s')
                        .help("Section to look in (defaults to global scope)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("print", print_matches)) => {
            let path = print_matches.get_one::<String>("path").unwrap();
            let document = load_document(path);
            println!("{}", serialize(&document));
        }
        Some(("convert", convert_matches)) => {
            let path = convert_matches.get_one::<String>("path").unwrap();
            let format = convert_matches.get_one::<String>("format").unwrap();
            handle_convert_command(path, format);
        }
        Some(("get", get_matches)) => {
            let path = get_matches.get_one::<String>("path").unwrap();
            let key = get_matches.get_one::<String>("key").unwrap();
            let section = get_matches.get_one::<String>("section");
            handle_get_command(path, key, section.map(String::as_str));
        }
        _ => unreachable!(),
    }
}

/// Read a file and parse it; parsing itself never fails.
fn load_document(path: &str) -> Document {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });
    parse_text(&source)
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str) {
    let document = load_document(path);
    match format {
        "ini" => println!("{}", serialize(&document)),
        "json" => match serde_json::to_string_pretty(&document) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            }
        },
        "yaml" => match serde_yaml::to_string(&document) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("Unknown format: {} (expected 'ini', 'json', or 'yaml')", format);
            std::process::exit(2);
        }
    }
}

/// Handle the get command
fn handle_get_command(path: &str, key: &str, section: Option<&str>) {
    let document = load_document(path);

    let lookup = match section {
        Some(name) => document
            .get_section(name)
            .and_then(|section| section.get_property(key)),
        None => document.get_property(key),
    };

    match lookup {
        Ok(property) => println!("{}", property.value()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
