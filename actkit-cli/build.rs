//! Build script for actkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("actkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Helpers for CI workflow steps")
        .long_about(
            "Validate repo-relative path inputs, publish job outputs and capture the tail of \
             command output in CI workflow steps",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("paths")
                .about("Read a list of repo-relative paths from an environment variable")
                .long_about(
                    "Parse one path per line from KEY, rejecting absolute, drive-prefixed, \
                     escaping and glob paths, and print the deduplicated list",
                )
                .arg(Arg::new("key").value_name("KEY").required(true))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["lines", "json", "yaml"])
                        .default_value("lines")
                        .env("ACTKIT_OUTPUT_FORMAT"),
                )
                .arg(Arg::new("output").long("output").value_name("NAME")),
            Command::new("check")
                .about("Check whether paths are safe repo-relative paths")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..),
                ),
            Command::new("normalize")
                .about("Print the normalized form of a path")
                .arg(Arg::new("path").value_name("PATH").required(true)),
            Command::new("output")
                .about("Publish a job output")
                .long_about("Append NAME=VALUE to the file named by GITHUB_OUTPUT")
                .arg(Arg::new("name").value_name("NAME").required(true))
                .arg(Arg::new("value").value_name("VALUE").required(true)),
            Command::new("run")
                .about("Run a command, keeping the tail of its output")
                .long_about(
                    "Run COMMAND, passing its output through while keeping the last KiB of it; \
                     the tail is printed again if the command fails",
                )
                .arg(
                    Arg::new("tail-kb")
                        .long("tail-kb")
                        .value_name("KIB"),
                )
                .arg(Arg::new("output").long("output").value_name("NAME"))
                .arg(
                    Arg::new("command")
                        .value_name("COMMAND")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("actkit.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
