// SPDX-License-Identifier: MPL-2.0
use nice_toast::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    let lang = args
        .opt_value_from_str::<_, String>("--lang")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --lang: {err}");
            None
        });
    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(Flags { lang, config_dir })
}
