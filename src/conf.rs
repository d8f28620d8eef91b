use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, path::PathBuf, time::Duration};

#[derive(Clone, Debug, Deserialize)]
pub struct Conf {
    pub server: ServerConf,
    pub upstream: UpstreamConf,
    pub store: StoreConf,
    pub client: ClientConf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConf {
    pub address: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpstreamConf {
    pub url: String,
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StoreConf {
    pub db_url: String,
    pub timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConf {
    pub url: String,
    pub timeout_ms: u64,
    pub output: PathBuf,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let mut figment = defaults();

        if let Some(data_dir) = data_dir() {
            figment = figment.merge(Toml::file(data_dir.join("cotacao.conf")));
        }

        let conf: Conf = figment
            .merge(Env::prefixed("COTACAO_").split("__"))
            .extract()?;

        Ok(conf)
    }
}

impl UpstreamConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl StoreConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ClientConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn defaults() -> Figment {
    let default_conf = include_bytes!("../cotacao.conf");
    let default_conf = String::from_utf8_lossy(default_conf);
    Figment::new().merge(Toml::string(&default_conf))
}

fn data_dir() -> Option<PathBuf> {
    match env::var_os("DATA_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => dirs::data_dir().map(|dir| dir.join("cotacao")),
    }
}
