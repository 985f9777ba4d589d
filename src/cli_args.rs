use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the configuration file. Defaults are used if not set.
    #[clap(long, env = "CONFIG_FILE")]
    pub config_file: Option<String>,
    /// Port to listen on. Overrides the port of the configured socket address.
    #[clap(long, env = "PORT")]
    pub port: Option<u16>,
}
