use clap::{Arg, ArgAction, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("radix")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a value between text, decimal, binary, hex and octal")
        .arg(Arg::new("value").help("Input value to convert").index(1))
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "radix", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "radix", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "radix", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
