use common_features_app::{embedded_options, start};
use shell_config::ShellOptions;

pub fn main() {
    console_error_panic_hook::set_once();

    let options = embedded_options();
    let level = options
        .as_ref()
        .map(ShellOptions::log_level)
        .unwrap_or_else(|_| ShellOptions::default().log_level());
    if let Some(level) = level.to_level() {
        _ = console_log::init_with_level(level);
    }

    let started = options.map_err(Into::into).and_then(|options| start(&options));
    match started {
        Ok(shell) => shell.forget(),
        Err(e) => {
            log::error!("startup failed: {e}");
            panic!("startup failed: {e}");
        }
    }
}
