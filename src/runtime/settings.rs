use crate::cli::Args;
use crate::config;

/// Load settings, layering CLI flags on top.
///
/// Config is optional: load or validation failures fall back to defaults.
/// Problems are returned as messages because logging is not set up yet.
pub fn load_settings(args: &Args) -> (config::Settings, Vec<String>) {
    let mut warnings = Vec::new();

    let loaded = match &args.config {
        Some(path) => config::Settings::load_from(Some(path), true),
        None => config::Settings::load(),
    };

    let mut settings = match loaded {
        Ok(s) => s,
        Err(e) => {
            warnings.push(format!("failed to load config, using defaults: {e}"));
            config::Settings::default()
        }
    };

    apply_overrides(&mut settings, args);

    if let Err(msg) = settings.validate() {
        warnings.push(format!("invalid config, using defaults: {msg}"));
        settings = config::Settings::default();
        apply_overrides(&mut settings, args);
    }

    (settings, warnings)
}

fn apply_overrides(settings: &mut config::Settings, args: &Args) {
    if let Some(player) = &args.player {
        settings.player.name = Some(player.clone());
    }
    if let Some(ms) = args.interval_ms {
        settings.poll.interval_ms = ms;
    }
}
