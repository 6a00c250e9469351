use std::process::ExitCode;

use anyhow::{bail, Context};
use lambda_core::{process, Normalizer};

const USAGE: &str = "\
Usage: lambda-core [OPTIONS] <SCENARIO>

Scenarios: id-app, skk, church-add, church-mult, omega, eta

Options:
      --max-steps <N>  stop after N reduction steps (default: 1000)
      --eta            eta-normalize the beta-normal form
  -h, --help           print this help
  -v, --version        print the version
";

enum Command {
    Help,
    Version,
    Run {
        scenario: String,
        normalizer: Normalizer,
        eta: bool,
    },
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut normalizer = Normalizer::default();
    let mut eta = false;
    let mut scenario = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "--eta" => eta = true,
            "--max-steps" => {
                let Some(value) = args.next() else {
                    bail!("`--max-steps` expects a value");
                };
                let limit = value
                    .parse::<usize>()
                    .with_context(|| format!("invalid step limit `{value}`"))?;
                normalizer = Normalizer::new(limit);
            }
            _ if arg.starts_with('-') => bail!("unknown option `{arg}`"),
            _ => {
                if scenario.replace(arg).is_some() {
                    bail!("expected a single scenario");
                }
            }
        }
    }
    let Some(scenario) = scenario else {
        bail!("missing scenario\n\n{USAGE}");
    };
    Ok(Command::Run {
        scenario,
        normalizer,
        eta,
    })
}

fn run() -> anyhow::Result<()> {
    match parse_args(std::env::args().skip(1))? {
        Command::Help => print!("{USAGE}"),
        Command::Version => println!("lambda-core {}", env!("CARGO_PKG_VERSION")),
        Command::Run {
            scenario,
            normalizer,
            eta,
        } => {
            let n = process(&scenario, &normalizer, eta)?;
            println!("{n}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
