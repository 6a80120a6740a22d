use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    /// Rescan the data directory on every catalog query instead of serving the snapshot
    pub rescan_on_query: bool,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Load `config/pollen.toml` (optional) with `POLLEN__SECTION__KEY` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/pollen", environment())
}

/// `POLLEN__SECTION__KEY` overrides, read from the process environment
fn environment() -> config::Environment {
    config::Environment::with_prefix("POLLEN")
        .separator("__")
        .try_parsing(true)
}

fn load_app_config_from(name: &str, environment: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8050)?
        .set_default("data.root", "data")?
        .set_default("catalog.rescan_on_query", false)?
        .add_source(config::File::with_name(name).required(false))
        .add_source(environment)
        .build()?;

    Ok(settings.try_deserialize()?)
}
