mod serde_duration;

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};

/// Prefix of environment overrides, e.g. `SORT_TEST_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "SORT_TEST_";

/// Settings file, relative to the project root.
pub const CONFIG_FILE: &str = "config/settings.toml";

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub data: DataConfig,
    pub bench: BenchConfig,
}

impl Config {
    pub fn default_path() -> anyhow::Result<std::path::PathBuf> {
        let root = project_root::get_project_root()?;
        Ok(root.join(CONFIG_FILE))
    }

    /// Layers the settings file and the environment. A missing file is not an
    /// error, every key has a default.
    pub fn figment(config_file: &std::path::Path) -> Figment {
        Figment::new()
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_file(config_file: &std::path::Path) -> anyhow::Result<Self> {
        let config = Self::figment(config_file).extract()?;
        Ok(config)
    }

    /// Reads `config/settings.toml` under the project root.
    pub fn try_read() -> anyhow::Result<Self> {
        Self::from_file(&Self::default_path()?)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: std::net::IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: std::net::Ipv4Addr::UNSPECIFIED.into(),
            port: 8000,
        }
    }
}

/// Shape of generated batches: how many arrays, and how big they get.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub range: std::ops::RangeInclusive<usize>,
    pub step: usize,
    #[serde(rename = "max-len")]
    pub max_len: usize,
    #[serde(rename = "max-value")]
    pub max_value: i64,
}

impl DataConfig {
    pub fn batch_sizes(
        &self,
    ) -> anyhow::Result<std::iter::StepBy<std::ops::RangeInclusive<usize>>> {
        if self.step == 0 {
            anyhow::bail!("data.step must be positive");
        }
        Ok(self.range.clone().step_by(self.step))
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            range: 100..=1_000,
            step: 300,
            max_len: 1_000,
            max_value: 1_000_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    #[serde(rename = "sample-size")]
    pub sample_size: usize,
    #[serde(
        rename = "warm-up-time",
        deserialize_with = "serde_duration::deserialize"
    )]
    pub warm_up_time: std::time::Duration,
    #[serde(
        rename = "measurement-time",
        deserialize_with = "serde_duration::deserialize"
    )]
    pub measurement_time: std::time::Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sample_size: 50,
            warm_up_time: std::time::Duration::from_secs(3),
            measurement_time: std::time::Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|jail| {
            let path = jail.directory().join("absent.toml");
            let config = Config::from_file(&path).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8000");
            Ok(())
        });
    }

    #[test]
    fn file_and_env_layers() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "settings.toml",
                r#"
                [logging]
                level = "debug"

                [server]
                host = "127.0.0.1"
                port = 8080

                [data]
                range = { start = 10, end = 40 }
                step = 10
                max-len = 8

                [bench]
                sample-size = 10
                warm-up-time = 1
                measurement-time = 2.5
                "#,
            )?;
            jail.set_env("SORT_TEST_SERVER__PORT", "9000");

            let path = jail.directory().join("settings.toml");
            let config = Config::from_file(&path).map_err(|e| e.to_string())?;
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9000");
            assert_eq!(config.data.max_len, 8);
            assert_eq!(config.data.max_value, 1_000_000);
            let sizes: Vec<_> = config.data.batch_sizes().map_err(|e| e.to_string())?.collect();
            assert_eq!(sizes, vec![10, 20, 30, 40]);
            assert_eq!(config.bench.sample_size, 10);
            assert_eq!(config.bench.warm_up_time, Duration::from_secs(1));
            assert_eq!(config.bench.measurement_time, Duration::from_millis(2500));
            Ok(())
        });
    }

    #[test]
    fn negative_durations_are_rejected() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("settings.toml", "[bench]\nwarm-up-time = -1\n")?;
            let path = jail.directory().join("settings.toml");
            assert!(Config::from_file(&path).is_err());
            Ok(())
        });
    }

    #[test]
    fn zero_step_is_rejected() {
        let data = DataConfig {
            step: 0,
            ..DataConfig::default()
        };
        assert!(data.batch_sizes().is_err());
    }
}
