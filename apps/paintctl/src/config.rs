use std::{collections::HashMap, fs};

use serde::Deserialize;

use dispatch_core::DEFAULT_ENDPOINT;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            interval_ms: 1000,
        }
    }
}

/// Defaults, overridden by `paintctl.toml` in the working directory,
/// overridden by environment variables. The `--endpoint` flag sits on top
/// of all three and is applied by the caller.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("paintctl.toml") {
        apply_file(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("PAINTCTL_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Ok(v) = std::env::var("PAINTCTL_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.interval_ms = parsed;
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("endpoint") {
            settings.endpoint = v.clone();
        }
        if let Some(v) = file_cfg.get("interval_ms") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.interval_ms = parsed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn defaults_target_the_local_painter() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "http://127.0.0.1:17000/");
        assert_eq!(settings.interval_ms, 1000);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "endpoint = \"http://10.0.0.2:17000/\"\ninterval_ms = \"250\"\n",
        );
        assert_eq!(settings.endpoint, "http://10.0.0.2:17000/");
        assert_eq!(settings.interval_ms, 250);
    }

    #[test]
    fn unparsable_file_values_are_ignored() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "interval_ms = \"soon\"\n");
        assert_eq!(settings.interval_ms, 1000);

        apply_file(&mut settings, "not toml at all [");
        assert_eq!(settings.endpoint, Settings::default().endpoint);
    }

    #[test]
    fn environment_overrides_the_config_file() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();

        let temp_root = env::temp_dir().join(format!("paintctl_config_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        fs::write(
            temp_root.join("paintctl.toml"),
            "endpoint = \"http://file.invalid:17000/\"\n",
        )
        .expect("config file");

        let original_dir = env::current_dir().expect("cwd");
        env::set_current_dir(&temp_root).expect("set cwd");
        env::set_var("PAINTCTL_ENDPOINT", "http://env.invalid:17000/");

        let settings = load_settings();

        env::remove_var("PAINTCTL_ENDPOINT");
        env::set_current_dir(original_dir).expect("restore cwd");
        fs::remove_dir_all(temp_root).expect("cleanup");

        assert_eq!(settings.endpoint, "http://env.invalid:17000/");
        assert_eq!(settings.interval_ms, 1000);
    }
}
