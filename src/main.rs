// SPDX-License-Identifier: MPL-2.0
use storefront_fx::app::{self, Flags};
use storefront_fx::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let log: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("invalid --log value: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("invalid --config-dir value: {err}");
            None
        });

    logging::init(log.as_deref());

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting storefront");
    app::run(Flags { config_dir })
}
