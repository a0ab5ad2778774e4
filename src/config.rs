//! Server configuration.
//!
//! Values come from built-in defaults, then an optional YAML file, then the
//! command line. [`Config::serve_config`] validates the result into the
//! immutable [`ServeConfig`] every connection shares.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use serde::Deserialize;

/// Command line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "sstt", about = "Static file HTTP/1.1 server with keep-alive")]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind (IP or hostname)
    #[arg(short = 'i', long)]
    pub host: Option<String>,

    /// Directory the files are served from
    #[arg(short, long)]
    pub webroot: Option<PathBuf>,

    /// Include debug messages in the log
    #[arg(short, long)]
    pub verbose: bool,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub verbose: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub idle_timeout_secs: u64,
    pub server_name: String,
    /// Answer 400 to requests that carry no `Host` header.
    pub require_host: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub webroot: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            idle_timeout_secs: 20,
            server_name: "web.sstt.org".to_string(),
            require_host: false,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            webroot: PathBuf::from("."),
        }
    }
}

/// Validated settings for the request engine.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Absolute path of the document root
    pub webroot: PathBuf,
    pub idle_timeout: Duration,
    pub server_name: String,
    pub require_host: bool,
}

impl ServeConfig {
    /// Value advertised in `Keep-Alive: timeout=`, one second past the idle
    /// timeout.
    pub fn keep_alive_secs(&self) -> u64 {
        self.idle_timeout.as_secs() + 1
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid YAML configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
    }

    /// Builds the configuration from the command line, loading the YAML file
    /// it names first.
    ///
    /// Without a config file, `--port` is mandatory.
    pub fn load(cli: Cli) -> anyhow::Result<Self> {
        if cli.config.is_none() && cli.port.is_none() {
            bail!("no port given: pass --port or a --config file");
        }
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.merge_cli(cli))
    }

    /// Command line flags override whatever is already set.
    pub fn merge_cli(mut self, cli: Cli) -> Self {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(host) = cli.host {
            self.server.host = host;
        }
        if let Some(webroot) = cli.webroot {
            self.static_files.webroot = webroot;
        }
        self.verbose |= cli.verbose;
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn serve_config(&self) -> anyhow::Result<ServeConfig> {
        let root = &self.static_files.webroot;
        let webroot = root
            .canonicalize()
            .with_context(|| format!("webroot {} is not accessible", root.display()))?;
        if !webroot.is_dir() {
            bail!("webroot {} is not a directory", webroot.display());
        }
        if self.server.idle_timeout_secs == 0 {
            bail!("idle_timeout_secs must be greater than zero");
        }

        Ok(ServeConfig {
            webroot,
            idle_timeout: Duration::from_secs(self.server.idle_timeout_secs),
            server_name: self.server.server_name.clone(),
            require_host: self.server.require_host,
        })
    }
}
