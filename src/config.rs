use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
    pub op_timeout_secs: u64,
}

impl StoreSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn op_timeout(&self) -> Duration {
        Duration::from_secs(self.op_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
    pub store: StoreSettings,
}

impl ServerConfig {
    /// Every key carries a default, so the service runs with no config file
    /// or environment present.
    pub fn load() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 8080u16)?
            .set_default("store.uri", "mongodb://localhost:27017")?
            .set_default("store.database", "logsdb")?
            .set_default("store.collection", "logs")?
            .set_default("store.connect_timeout_secs", 10u64)?
            .set_default("store.op_timeout_secs", 5u64)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("MONGOLOG").separator("__"))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        Ok(settings)
    }
}
