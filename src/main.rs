//! Savings Circle CLI
//!
//! Loads a saved group form, validates it and submits the creation request
//! through the configured relay.
//!
//! Usage: `savings-circle <draft.json> [public|private]`. The optional group
//! type overrides the one stored in the draft.

use savings_circle::collaborators::{LogNavigator, TracingNotifier};
use savings_circle::models::GroupType;
use savings_circle::submitter::HttpGroupSubmitter;
use savings_circle::{
    AppConfig, AppError, AppResult, FormDraft, FormState, GroupRequestBuilder, SubmissionOutcome,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("savings_circle={},reqwest=warn", config.log_level).into()
            }),
        )
        .init();

    info!("Environment: {}", config.environment);
    info!("Submission relay: {}", config.submitter.url);

    match run(&config).await {
        Ok(SubmissionOutcome::Success { tx_id }) => {
            info!("Transaction: {}", tx_id);
            Ok(())
        }
        Ok(SubmissionOutcome::Unconfirmed) => {
            warn!("Relay accepted the request without a transaction hash");
            Ok(())
        }
        Err(e) => {
            error!("Group creation failed: {}", e);
            if e.is_correctable() {
                error!("Fix the draft and run the command again");
            }
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: &AppConfig) -> AppResult<SubmissionOutcome> {
    let mut args = std::env::args().skip(1);
    let draft_path = args
        .next()
        .ok_or_else(|| AppError::Config("usage: savings-circle <draft.json> [public|private]".into()))?;
    let group_type = args
        .next()
        .map(|raw| GroupType::from_str(&raw).map_err(AppError::Config))
        .transpose()?;

    let form = load_form(&draft_path, group_type).await?;

    info!(
        "Loaded {} group draft '{}' with {} invitee(s)",
        form.group_type().as_str(),
        form.data().group_name,
        form.invited_members().len()
    );

    let submitter = Arc::new(HttpGroupSubmitter::new(&config.submitter)?);
    let mut builder = GroupRequestBuilder::new(
        submitter,
        Arc::new(TracingNotifier),
        Arc::new(LogNavigator),
    )
    .with_redirect_delay(config.redirect_delay())
    .with_listing_path(config.groups_path.clone());

    let outcome = builder.create_group(&form).await?;
    if let Some(redirect) = builder.take_redirect() {
        redirect.await.ok();
    }
    Ok(outcome)
}

/// Read a draft file, optionally overriding its group type
async fn load_form(path: &str, group_type: Option<GroupType>) -> AppResult<FormState> {
    let raw = tokio::fs::read_to_string(path).await?;
    let draft: FormDraft = serde_json::from_str(&raw)?;
    let mut form = FormState::from_draft(draft)?;

    if let Some(group_type) = group_type {
        form.set_group_type(group_type);
    }
    Ok(form)
}
