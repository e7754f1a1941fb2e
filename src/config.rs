use std::net::SocketAddr;

use clap::Parser;

/// Serve the in-memory authors and books collections over GraphQL
#[derive(Parser, Debug)]
#[command(name = "library", version, about)]
pub struct Config {
    /// Socket address the HTTP server binds to
    #[arg(long, env = "LIBRARY_LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: SocketAddr,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the GraphQL schema in SDL form and exit
    #[arg(long)]
    pub print_schema: bool,
}
