// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        duration_ms: args.opt_value_from_str("--duration-ms").unwrap_or(None),
    };

    app::run(flags)
}
