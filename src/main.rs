// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::logging;

const HELP: &str = "\
iced_toasts - toast queue demo

USAGE:
  iced_toasts [OPTIONS]

OPTIONS:
  --max-visible <N>     Maximum number of toasts shown at once
  --timeout-ms <MS>     Auto-dismiss timeout for non-error toasts
  --config-dir <PATH>   Directory holding settings.toml
  -v, --verbose         Log every queue mutation
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        max_visible: args.opt_value_from_str("--max-visible")?,
        timeout_ms: args.opt_value_from_str("--timeout-ms")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
