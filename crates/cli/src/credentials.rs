//! Credential loading.
//!
//! The API key and user id each live on the first line of a small text file
//! next to where the automator is run. Flags or environment variables take
//! precedence over the files.

use std::path::Path;

use anyhow::{Context, Result};
use monday::UserId;
use monday_api::{ApiKey, Credentials};

use crate::args::CredentialArgs;

pub fn load(args: &CredentialArgs) -> Result<Credentials> {
    let raw_key = match &args.api_key {
        Some(key) => key.clone(),
        None => first_line(&args.api_key_file)?,
    };
    let api_key = ApiKey::new(raw_key).context("API key is empty")?;

    let raw_user = match &args.user_id {
        Some(user) => user.clone(),
        None => first_line(&args.user_id_file)?,
    };
    let user_id: UserId = raw_user
        .parse()
        .with_context(|| format!("user id '{}' is not a number", raw_user.trim()))?;

    Ok(Credentials::new(api_key, user_id))
}

fn first_line(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text.lines().next().unwrap_or_default().to_string())
}
