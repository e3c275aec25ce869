// SPDX-License-Identifier: MPL-2.0
use portfolio_lens::app::{self, paths, Flags};
use portfolio_lens::content::Catalog;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
PortfolioLens

USAGE:
  portfolio_lens [OPTIONS]

OPTIONS:
  --lang <id>                Interface language (e.g. en-US, fr)
  --config-dir <dir>         Directory holding settings.toml
  --content <file.toml>      Site content catalog to use instead of the built-in one
  --diagnostics-out <file>   Write the diagnostics log as JSON when the window closes
  -h, --help                 Print this help
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    content: Option<PathBuf>,
    diagnostics_out: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        content: args.opt_value_from_os_str("--content", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        diagnostics_out: args.opt_value_from_os_str("--diagnostics-out", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.config_dir);

    let (catalog, content_fallback) = match Catalog::load_with_override(args.content.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Error: built-in content is invalid: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(err) = &content_fallback {
        eprintln!("Warning: could not use --content ({err}); showing built-in content");
    }

    let flags = Flags {
        lang: args.lang,
        catalog: Arc::new(catalog),
        content_fallback,
        diagnostics_out: args.diagnostics_out,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
