//! Command-line interface for radix
//! One-shot conversion: parse a value in any of the five representations
//! and print all of them, plus the status line the interactive viewer
//! would show.
//!
//! Usage:
//!   radix <value> [--from <field>] [--format table|json]
//!   radix --sample

use clap::{Arg, ArgAction, Command};
use radix_core::convert::{Converter, Severity, SourceField, SAMPLE_TEXT};

fn main() {
    let matches = Command::new("radix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a value between text, decimal, binary, hex and octal")
        .arg_required_else_help(true)
        .arg(
            Arg::new("value")
                .help("Input value to convert")
                .required_unless_present("sample")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Source representation: text, decimal, binary, hex, octal")
                .default_value("text"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: table or json")
                .default_value("table"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Convert the built-in sample input")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let (field, value) = if matches.get_flag("sample") {
        (SourceField::Text, SAMPLE_TEXT.to_string())
    } else {
        let field: SourceField = matches
            .get_one::<String>("from")
            .unwrap()
            .parse()
            .unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                std::process::exit(2);
            });
        let value = matches
            .get_one::<String>("value")
            .expect("value is required unless --sample is given")
            .clone();
        (field, value)
    };

    let format = matches.get_one::<String>("format").unwrap();
    handle_convert(field, &value, format);
}

/// Run one transition and print the result
fn handle_convert(field: SourceField, value: &str, format: &str) {
    let mut converter = Converter::new();
    converter.apply_edit(field, value);

    if converter.status().severity == Severity::Error {
        eprintln!("{}", converter.status().message);
        std::process::exit(1);
    }

    match format {
        "table" => print!("{}", render_table(&converter)),
        "json" => println!("{}", render_json(&converter)),
        other => {
            eprintln!("Unknown output format: {other} (expected table or json)");
            std::process::exit(2);
        }
    }
}

fn render_table(converter: &Converter) -> String {
    let snapshot = converter.snapshot();
    let status = converter.status();
    format!(
        "Text:    {}\nDecimal: {}\nBinary:  {}\nHex:     {}\nOctal:   {}\n{} · {} bytes · {} chars\n",
        snapshot.text,
        snapshot.decimal,
        snapshot.binary,
        snapshot.hex,
        snapshot.octal,
        status.message,
        status.byte_count,
        status.char_count,
    )
}

fn render_json(converter: &Converter) -> String {
    let output = serde_json::json!({
        "fields": converter.snapshot(),
        "status": converter.status(),
    });
    serde_json::to_string_pretty(&output).expect("status and snapshot serialize to JSON")
}
