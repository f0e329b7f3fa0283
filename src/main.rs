// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use vitrine::app::{self, paths, Flags};

const HELP: &str = "\
Usage: vitrine [OPTIONS] [CATALOG]

Arguments:
  [CATALOG]              Gallery catalog (TOML) to open

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory holding saved session state
  -h, --help             Print help

Set RUST_LOG to adjust logging (default: info,vitrine=debug).";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,vitrine=debug")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        config_dir: optional_value(&mut args, "--config-dir"),
        data_dir: optional_value(&mut args, "--data-dir"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::debug!(?flags, "starting vitrine");

    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(key, error = %err, "ignoring invalid command-line value");
        None
    })
}
