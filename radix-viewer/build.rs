use clap::{Arg, Command};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("radixv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal base converter")
        .arg(Arg::new("value").help("Initial value to convert").index(1))
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Representation of the initial value: text, decimal, binary, hex, octal")
                .default_value("text"),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "radixv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "radixv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "radixv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
