use crate::cli::actions::Action;
use crate::codeplay;
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Fail fast on a malformed DSN before touching the pool
            let dsn = Url::parse(&dsn).context("Invalid database connection string")?;

            codeplay::new(port, dsn.as_str()).await?;
        }
    }

    Ok(())
}
