// Configuration module entry point
// Loads runtime and logging settings from file, environment and defaults

mod types;

pub use types::{LoggingSettings, ServerSettings, Settings};

/// Environment variable prefix, e.g. `ROUTER_SERVER__WORKERS=4`
const ENV_PREFIX: &str = "ROUTER";

impl Settings {
    /// Load settings from the given file path (extension optional).
    ///
    /// The file is not required; environment variables override it and
    /// defaults fill anything left unset.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.addr", types::default_addr())?
            .set_default("logging.access_log", types::default_access_log())?
            .set_default(
                "logging.access_log_format",
                types::default_access_log_format(),
            )?
            .build()?;

        settings.try_deserialize()
    }

    /// Load from `router.toml` in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("router")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.addr, "127.0.0.1:9999");
        assert_eq!(settings.server.workers, None);
        assert_eq!(settings.server.max_body_size, 10_485_760);
        assert!(settings.logging.access_log);
        assert_eq!(settings.logging.access_log_format, "common");
        assert!(settings.logging.access_log_file.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from("/nonexistent/dir/router-settings").unwrap();
        assert_eq!(settings.server.addr, Settings::default().server.addr);
        assert_eq!(settings.logging.access_log_format, "common");
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("static-router-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("router.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\naddr = \":8088\"\nworkers = 2\nmax_body_size = 1024\n\n[logging]\naccess_log = false\naccess_log_format = \"json\""
        )
        .unwrap();

        let settings = Settings::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.server.addr, ":8088");
        assert_eq!(settings.server.workers, Some(2));
        assert_eq!(settings.server.max_body_size, 1024);
        assert!(!settings.logging.access_log);
        assert_eq!(settings.logging.access_log_format, "json");

        std::fs::remove_dir_all(&dir).ok();
    }
}
