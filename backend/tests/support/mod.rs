//! Shared fixtures: a throwaway configuration and recording fakes for the
//! notebook and mail integrations.

#![allow(dead_code)]

use async_trait::async_trait;
use backend::config::AppConfig;
use backend::eln::{ElnClient, ElnError, ElnTarget, UploadFile};
use backend::notify::{MailError, Mailer};
use backend::state::AppState;
use lettre::Message;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        database_path: dir.join("forms.sqlite"),
        schema_dir: dir.join("schemas"),
        jobrequest_conf: dir.join("jobrequest-conf.json"),
        static_dir: dir.join("build"),
        ..AppConfig::default()
    }
}

pub fn test_state(dir: &Path, eln: Arc<FakeEln>, mailer: Arc<FakeMailer>) -> AppState {
    AppState::with_clients(test_config(dir), eln, mailer)
}

/// Writes a job-request configuration with one entry for the "SEM" schemas.
pub fn write_job_request_conf(dir: &Path) {
    let conf = json!({
        "confList": [{
            "requestSchemaTitle": "SEM request",
            "completeSchemaTitle": "SEM complete",
            "submitButtonText": "Send to SEM team",
            "requesterEmailKeyword": "email",
            "requesterNameKeyword": "name",
            "operatorNameKeyword": "operator",
            "smtp": "smtp.example.org",
            "from": "lab@example.org",
            "operators": { "Jane_Doe": "jane@example.org" },
            "responsibleOperatorEmail": "head@example.org",
            "confirmationEmailSubject": "Request received",
            "confirmationHeaderText": "<p>Thank you.</p>",
            "requestReceivedEmailSubject": "New SEM request",
            "requestReceivedHeaderText": "<p>New request:</p>",
            "requestAcceptedSubject": "Request accepted",
            "requestAcceptedHeaderText": "<p>Accepted:</p>"
        }]
    });
    std::fs::write(dir.join("jobrequest-conf.json"), conf.to_string()).unwrap();
}

/// Records every notebook call as a short string, e.g. `upload:json_data.json`.
#[derive(Default)]
pub struct FakeEln {
    pub calls: Mutex<Vec<String>>,
    pub uploads: Mutex<Vec<UploadFile>>,
    pub fail_uploads: bool,
}

impl FakeEln {
    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ElnClient for FakeEln {
    async fn create_experiment(&self, _target: &ElnTarget) -> Result<i64, ElnError> {
        self.record("create".to_string());
        Ok(42)
    }

    async fn update_experiment(
        &self,
        _target: &ElnTarget,
        id: i64,
        title: &str,
        _body: &str,
    ) -> Result<(), ElnError> {
        self.record(format!("update:{}:{}", id, title));
        Ok(())
    }

    async fn upload_file(
        &self,
        _target: &ElnTarget,
        _id: i64,
        file: UploadFile,
    ) -> Result<(), ElnError> {
        if self.fail_uploads {
            return Err(ElnError::Status {
                status: 403,
                body: "forbidden".to_string(),
            });
        }
        self.record(format!("upload:{}", file.file_name));
        self.uploads.lock().unwrap().push(file);
        Ok(())
    }

    async fn add_tag(&self, _target: &ElnTarget, _id: i64, tag: &str) -> Result<(), ElnError> {
        self.record(format!("tag:{}", tag));
        Ok(())
    }

    async fn list_tags(&self, target: &ElnTarget) -> Result<Value, ElnError> {
        self.record(format!("tags:{}", target.endpoint));
        Ok(json!([{ "tag": "sem" }, { "tag": "xrd" }]))
    }
}

/// Keeps the recipients of every delivered message, per relay.
#[derive(Default)]
pub struct FakeMailer {
    pub sent: Mutex<Vec<(String, Vec<String>)>>,
    pub fail: bool,
}

impl FakeMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, Vec<String>)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, relay: &str, messages: Vec<Message>) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::NoRecipients);
        }
        let mut sent = self.sent.lock().unwrap();
        for message in messages {
            let to = message.envelope().to().iter().map(|a| a.to_string()).collect();
            sent.push((relay.to_string(), to));
        }
        Ok(())
    }
}
