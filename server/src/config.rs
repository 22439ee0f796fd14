//! Command-line and environment configuration for the server binary.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "In-memory to-do list over HTTP")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(env = "PORT", default_value_t = 9000)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
