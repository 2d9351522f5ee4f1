// Command-line interface for richtext
//
// This binary converts documents between HTML, the JSON form of the rich document tree
// and a tree visualization. The conversion itself lives in the richtext-babel crate; this
// crate only wires files, configuration and formats together.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  richtext <input> --to <format> [--from <format>] [--output <file>]          - Convert between formats (default)
//  richtext convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  richtext --list-formats                                                     - List available formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Keys that mirror a configuration entry
// (standalone, title, pretty) override it; the rest are passed on to the target format.
// Example:
//  richtext page.html --to html --extra-standalone --extra-title "My page"

use clap::{Arg, ArgAction, Command, ValueHint};
use richtext_babel::formats::{HtmlFormat, JsonFormat};
use richtext_babel::{FormatRegistry, NodeRegistry};
use richtext_config::{Loader, RichtextConfig};
use std::collections::HashMap;
use std::fs;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // The next arg is a value unless it is another flag or the end
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("richtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting rich text documents")
        .long_about(
            "richtext converts between HTML and the rich document tree used by the editor.\n\n\
            Formats:\n  \
            - html:     HTML fragments or documents (.html, .htm)\n  \
            - json:     The document tree as JSON (.json)\n  \
            - treeviz:  Tree visualization (output only)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            richtext page.html --to treeviz                 # Inspect the imported tree\n  \
            richtext page.html --to json -o page.json       # Save the tree as JSON\n  \
            richtext page.json --to html --extra-standalone # Full HTML document"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a richtext.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between document formats (default command)")
                .long_about(
                    "Convert documents between different formats.\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    richtext convert page.html --to json          # HTML to JSON (stdout)\n  \
                    richtext convert tree.json --to html -o p.html # JSON to HTML file\n  \
                    richtext page.html --to treeviz               # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: html, json, treeviz\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading file path means the convert subcommand was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                fail("--to is required");
            };
            let registry = build_registry(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with converted output. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// The default formats, configured from `config`.
fn build_registry(config: &RichtextConfig) -> FormatRegistry {
    let nodes = NodeRegistry::from(&config.import);
    debug!(kinds = ?nodes.kinds(), "node kinds registered for import");

    let mut registry = FormatRegistry::with_node_registry(nodes.clone());
    registry.register(HtmlFormat::new(nodes).with_options((&config.convert.html).into()));
    registry.register(JsonFormat::from(&config.convert.json));
    registry
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        fail(&e.to_string());
    }
    if let Err(e) = registry.get(to) {
        fail(&e.to_string());
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    debug!(blocks = doc.len(), from, "parsed input");

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &RichtextConfig) {
    let registry = build_registry(config);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut modes = Vec::new();
        if format.supports_parsing() {
            modes.push("parse");
        }
        if format.supports_serialization() {
            modes.push("serialize");
        }
        println!(
            "  {name:<10} {:<18} {} [{}]",
            format!("({})", modes.join(", ")),
            format.description(),
            format.file_extensions().join(", ")
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RichtextConfig {
    let loader = Loader::new().with_optional_file("richtext.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Moves extras that mirror configuration keys into `config`.
fn apply_config_overrides(config: &mut RichtextConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("standalone") {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(title) = extra_params.remove("title") {
        config.convert.html.title = title;
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.convert.json.pretty = parse_bool_arg("pretty", &raw);
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
