use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show which tenant the hostname resolves to
    Resolve,

    /// List every tenant profile (access keys redacted)
    Tenants,

    /// Probe the resolved tenant's backend
    Check,

    /// Sign in with email and password
    Login {
        /// Defaults to the remembered email
        #[arg(long)]
        email: Option<String>,

        #[arg(long, env = "TP_PASSWORD", hide_env_values = true)]
        password: String,

        /// Remember the email for the next login
        #[arg(long, conflicts_with = "forget")]
        remember: bool,

        /// Clear the remembered email
        #[arg(long)]
        forget: bool,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long, env = "TP_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        confirm_password: String,

        /// Accept the Terms & Conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Clear the remembered email
    Forget,
}
