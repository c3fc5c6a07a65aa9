use clap::Parser;
use sort_test_config::Config;

/// Command-line overrides, applied on top of the settings file and the
/// environment.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file, `config/settings.toml` under the project root by default.
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
    #[arg(long)]
    pub host: Option<std::net::IpAddr>,
    #[arg(short, long)]
    pub port: Option<u16>,
    #[arg(short, long)]
    pub log_level: Option<String>,
}

/// Loads configuration from the TOML file and merges it with CLI arguments.
pub fn get_config() -> anyhow::Result<Config> {
    resolve(Cli::parse())
}

pub fn resolve(cli: Cli) -> anyhow::Result<Config> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let mut figment = Config::figment(&config_path);

    if let Some(host) = cli.host {
        figment = figment.merge(("server.host", host.to_string()));
    }
    if let Some(port) = cli.port {
        figment = figment.merge(("server.port", port));
    }
    if let Some(level) = cli.log_level {
        figment = figment.merge(("logging.level", level));
    }

    let config: Config = figment.extract()?;
    Ok(config)
}
