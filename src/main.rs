// SPDX-License-Identifier: MPL-2.0
use folio_lens::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "folio_lens=info";

const HELP: &str = "\
folio_lens - portfolio gallery presenter

USAGE:
    folio_lens [OPTIONS] [MANIFEST]

ARGS:
    <MANIFEST>    Project manifest (TOML) to open

OPTIONS:
    --lang <id>          Interface language (e.g. en-US, fr)
    --config-dir <dir>   Directory holding settings.toml
    -h, --help           Print this help

ENVIRONMENT:
    FOLIO_LENS_CONFIG_DIR   Config directory when --config-dir is absent
    RUST_LOG                Log filter (default: folio_lens=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring extra arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        manifest: args.opt_free_from_str::<PathBuf>()?,
    })
}
