use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(about = "Tenant portal CLI: resolve tenants and talk to their auth backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hostname the request arrived on; picks the tenant
    #[arg(long, global = true, env = "TP_HOSTNAME", default_value = "localhost")]
    pub hostname: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
