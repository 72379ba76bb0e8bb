use std::net::SocketAddr;

use serde::Deserialize;
use tallyswitch_core::error::{Result, TallyError};
use tallyswitch_core::SwitchState;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub switch: SwitchSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            switch: SwitchSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.switch.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TallyError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchSection {
    /// One of `ON`, `OFF`, `UNKNOWN`.
    #[serde(default = "default_initial_state")]
    pub initial_state: String,
}

impl Default for SwitchSection {
    fn default() -> Self {
        Self { initial_state: default_initial_state() }
    }
}

impl SwitchSection {
    pub fn validate(&self) -> Result<()> {
        self.initial_state().map(|_| ())
    }

    pub fn initial_state(&self) -> Result<SwitchState> {
        self.initial_state.parse()
    }
}

fn default_initial_state() -> String {
    SwitchState::default().as_str().into()
}
