use std::io;
use std::process::ExitCode;

use nm_cli::{CliError, Command};
use nm_core::Settings;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "numethods-cli [--settings FILE] <normal|student-t|linear>";

fn parse_args(args: &[String]) -> Result<(Command, Settings), CliError> {
    let mut settings = Settings::default();
    let mut command = None;
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--settings" => {
                let path = it
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("--settings needs a path\n{USAGE}")))?;
                settings = Settings::from_json_file(path)?;
            }
            "-h" | "--help" => return Err(CliError::Usage(USAGE.into())),
            name if command.is_none() => command = Some(Command::parse(name)?),
            extra => {
                return Err(CliError::Usage(format!(
                    "unexpected argument {extra:?}\n{USAGE}"
                )))
            }
        }
    }
    let command = command.ok_or_else(|| CliError::Usage(USAGE.into()))?;
    Ok((command, settings))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|(command, settings)| {
        tracing::debug!(?command, ?settings, "starting");
        nm_cli::run(command, &settings, io::stdin().lock(), io::stdout().lock())
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
