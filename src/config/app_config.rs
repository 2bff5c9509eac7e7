use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker thread count. Left to actix-web (one per core) when unset.
    pub workers: Option<usize>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load(&run_mode, Environment::with_prefix("APP").separator("__"))
    }

    fn load(run_mode: &str, environment: Environment) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Listen on every interface unless told otherwise
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // E.g. `APP__SERVER__PORT=5001 ./target/hola-mibanco` would set `server.port`
            .add_source(environment.try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn app_env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("APP")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = AppConfig::load("test", app_env(&[])).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.workers, None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::load(
            "test",
            app_env(&[
                ("APP__SERVER__HOST", "127.0.0.1"),
                ("APP__SERVER__PORT", "9090"),
                ("APP__SERVER__WORKERS", "2"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.workers, Some(2));
    }

    #[test]
    fn rejects_port_out_of_range() {
        let result = AppConfig::load("test", app_env(&[("APP__SERVER__PORT", "70000")]));
        assert!(result.is_err());
    }
}
