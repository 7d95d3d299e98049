use std::path::Path;

use colored::Colorize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use webhook_entity::{Entity, ValidationErrors, Webhook, WebhookId};

use crate::config::{AppConfig, OwnerConfig};
use crate::errors::Error;

#[cfg(test)]
#[path = "webhook_cmd_tests.rs"]
mod tests;

/// Validation outcome for one configured webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookReport {
    /// Position of the webhook in the configuration file
    pub index: usize,

    /// URL as written in the file
    pub url: String,

    /// Every violation found, if any
    pub result: Result<(), ValidationErrors>,
}

impl WebhookReport {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Validates every webhook in the configuration.
///
/// All webhooks are checked; failures do not stop the pass.
pub fn validate_webhooks(config: &AppConfig) -> Vec<WebhookReport> {
    config
        .webhooks
        .iter()
        .enumerate()
        .map(|(index, definition)| {
            let result = definition.to_webhook().validate();
            if let Err(e) = &result {
                warn!(message = "Invalid webhook", index, url = %definition.url, error = %e);
            }
            WebhookReport {
                index,
                url: definition.url.clone(),
                result,
            }
        })
        .collect()
}

/// Picks the owner ids, letting command line values override the file.
///
/// # Errors
///
/// Returns `Error::Config` when neither source provides one of the ids, or
/// when an id is the nil placeholder written by `init`. Malformed ids are
/// left for the webhook entity to reject.
pub fn resolve_owner(
    config: &AppConfig,
    company_id: Option<&str>,
    repository_id: Option<&str>,
) -> Result<OwnerConfig, Error> {
    let from_file = config.owner.as_ref();

    let company_id = company_id
        .map(str::to_string)
        .or_else(|| from_file.map(|owner| owner.company_id.clone()))
        .ok_or_else(|| Error::Config("No company id configured".to_string()))?;

    let repository_id = repository_id
        .map(str::to_string)
        .or_else(|| from_file.map(|owner| owner.repository_id.clone()))
        .ok_or_else(|| Error::Config("No repository id configured".to_string()))?;

    reject_nil_id("company", &company_id)?;
    reject_nil_id("repository", &repository_id)?;

    Ok(OwnerConfig {
        company_id,
        repository_id,
    })
}

fn reject_nil_id(kind: &str, value: &str) -> Result<(), Error> {
    match Uuid::parse_str(value) {
        Ok(uuid) if uuid.is_nil() => {
            warn!(message = "Nil owner id", kind, value);
            Err(Error::Config(format!(
                "The {} id is the nil placeholder; set a real id",
                kind
            )))
        }
        _ => Ok(()),
    }
}

/// Builds storable webhooks from the configuration.
///
/// Every webhook must validate. Each one is given the owner ids and a fresh
/// webhook id.
///
/// # Errors
///
/// - `Error::InvalidWebhooks` if any definition fails validation
/// - `Error::Webhook` if the owner ids are not valid UUIDs
pub fn build_webhooks(config: &AppConfig, owner: &OwnerConfig) -> Result<Vec<Webhook>, Error> {
    let failed = validate_webhooks(config)
        .iter()
        .filter(|report| !report.is_valid())
        .count();
    if failed > 0 {
        return Err(Error::InvalidWebhooks { count: failed });
    }

    config
        .webhooks
        .iter()
        .map(|definition| -> Result<Webhook, Error> {
            let webhook = definition
                .to_webhook()
                .set_company_id_and_repository_id(&owner.company_id, &owner.repository_id)?
                .set_webhook_id(WebhookId::new());
            Ok(webhook)
        })
        .collect()
}

/// Load the configuration and print a validation line per webhook.
#[instrument]
pub fn execute_validate(config_path: &Path) -> Result<(), Error> {
    debug!(message = "Validating webhooks", path = ?config_path);
    let config = AppConfig::load(config_path)?;

    let reports = validate_webhooks(&config);
    for report in &reports {
        match &report.result {
            Ok(()) => println!("{} [{}] {}", "valid".green(), report.index, report.url),
            Err(e) => println!("{} [{}] {}: {}", "invalid".red(), report.index, report.url, e),
        }
    }

    let failed = reports.iter().filter(|report| !report.is_valid()).count();
    if failed > 0 {
        return Err(Error::InvalidWebhooks { count: failed });
    }

    info!(message = "All webhooks are valid", count = reports.len());
    Ok(())
}

/// Load the configuration and print the stored form of every webhook.
#[instrument]
pub fn execute_encode(
    config_path: &Path,
    company_id: Option<&str>,
    repository_id: Option<&str>,
) -> Result<(), Error> {
    debug!(message = "Encoding webhooks", path = ?config_path);
    let config = AppConfig::load(config_path)?;
    let owner = resolve_owner(&config, company_id, repository_id)?;

    let webhooks = build_webhooks(&config, &owner)?;
    for webhook in &webhooks {
        let bytes = webhook.to_bytes()?;
        println!("{}", String::from_utf8_lossy(&bytes));
    }

    info!(
        message = "Encoded webhooks",
        table = Webhook::TABLE,
        count = webhooks.len()
    );
    Ok(())
}
