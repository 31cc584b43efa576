//! # Job-Request Notifications
//!
//! Some schemas belong to a *job request* workflow: a requester fills in a
//! request form, an operator later completes it. Which schemas take part, and
//! the e-mail templates used for them, come from `jobrequest-conf.json`.
//!
//! That file is re-read on every call to `load_job_request_conf` (or its
//! async wrapper `read_job_request_conf`), so edits take effect without a
//! restart.
//!
//! - `keywords`: finds the requester's address and the operator's name inside
//!   submitted form data.
//! - `compose`: builds the HTML e-mails and their JSON attachments.
//! - `Mailer` / `SmtpMailer`: delivers them over implicit-TLS SMTP.

pub mod compose;
pub mod keywords;

pub use compose::{job_request_messages, request_accepted_message};
pub use keywords::find_keyword;

use async_trait::async_trait;
use common::model::jobrequest::JobRequestConf;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use actix_web::web;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("invalid content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("could not encode attachment: {0}")]
    Attachment(#[from] serde_json::Error),

    #[error("message has no recipients")]
    NoRecipients,
}

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("cannot read job request configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid job request configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_job_request_conf(path: &Path) -> Result<JobRequestConf, ConfError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Reads the job-request configuration on the blocking pool. Any failure is
/// logged and reported as `None`; callers treat it as "no workflow configured".
pub async fn read_job_request_conf(path: PathBuf) -> Option<JobRequestConf> {
    let shown = path.display().to_string();
    match web::block(move || load_job_request_conf(&path)).await {
        Ok(Ok(conf)) => Some(conf),
        Ok(Err(e)) => {
            log::info!("no job request configuration at {}: {}", shown, e);
            None
        }
        Err(e) => {
            log::error!("reading {} failed: {}", shown, e);
            None
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends `messages` in order through `relay`, stopping at the first failure.
    async fn send(&self, relay: &str, messages: Vec<Message>) -> Result<(), MailError>;
}

/// Delivers over SMTP with implicit TLS (port 465), one connection per call.
#[derive(Debug, Clone, Default)]
pub struct SmtpMailer;

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, relay: &str, messages: Vec<Message>) -> Result<(), MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?.build();
        for message in messages {
            transport.send(message).await?;
        }
        log::info!("mail delivered through {}", relay);
        Ok(())
    }
}
