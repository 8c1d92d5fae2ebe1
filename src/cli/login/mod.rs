//! Login command - one-shot authentication against the configured users

use clap::Args;

use crate::config::AppConfig;
use crate::domain::AuthError;
use crate::infrastructure::logging;

#[derive(Args)]
pub struct LoginArgs {
    /// Username to authenticate
    #[arg(long)]
    pub username: String,

    /// Plaintext password
    #[arg(long)]
    pub password: String,
}

/// Seed configured users, authenticate once and print the token details
pub async fn run(args: LoginArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let state = crate::create_app_state(&config).await?;
    let details = state
        .security_service
        .authenticate(&args.username, &args.password)
        .await
        .map_err(describe_failure)?;

    println!("{}", serde_json::to_string_pretty(&details)?);

    Ok(())
}

/// Keep the rejection code next to the message; faults pass through as-is
fn describe_failure(err: AuthError) -> anyhow::Error {
    match err.code() {
        Some(code) => anyhow::anyhow!("{} ({})", err, code),
        None => err.into(),
    }
}
