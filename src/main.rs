// SPDX-License-Identifier: MPL-2.0
use lexfolio::app::{self, paths, Flags};
use lexfolio::logging;

const HELP: &str = "\
lexfolio - law practice brochure

USAGE:
  lexfolio [OPTIONS]

OPTIONS:
  --lang <LOCALE>      Interface language (pt-BR, en-US)
  --page <PAGE>        Page shown at startup (home, blog)
  --open <N>           Open blog article N at startup
  --link <LINK>        Startup link such as blog#open=2 or #contato
  --config-dir <DIR>   Directory holding settings.toml and content.toml
  --data-dir <DIR>     Directory holding the persisted state
  --verbose            Log debug output
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains("--verbose");
    logging::init(verbose);

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        page: optional_value(&mut args, "--page"),
        open: optional_value(&mut args, "--open"),
        link: optional_value(&mut args, "--link"),
        data_dir: optional_value(&mut args, "--data-dir"),
        config_dir: optional_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "ignoring invalid argument");
            None
        }
    }
}
