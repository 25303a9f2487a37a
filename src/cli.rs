use clap::Parser;

/// Create a readWrite user on every user database of a MongoDB server.
#[derive(Parser, Debug, Clone)]
#[command(name = "mongo-provisiodactyl", version)]
pub struct Args {
    /// Administrator username
    #[arg(long, env = "MONGO_ADMIN_USER", value_name = "USER")]
    pub admin_user: String,

    /// Administrator password
    #[arg(long, env = "MONGO_ADMIN_PASSWORD", value_name = "PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// Server host name or address
    #[arg(long, env = "MONGO_HOST")]
    pub host: String,

    /// Server port
    #[arg(long, env = "MONGO_PORT")]
    pub port: u16,

    /// Name of the user to create
    #[arg(long, env = "MONGO_NEW_USER", value_name = "USER")]
    pub new_user: String,

    /// Password of the user to create
    #[arg(long, env = "MONGO_NEW_PASSWORD", value_name = "PASSWORD", hide_env_values = true)]
    pub new_password: String,

    /// List the target databases without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the affected databases as a JSON array
    #[arg(long)]
    pub json: bool,
}
