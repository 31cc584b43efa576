use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `jobrequest-conf.json`.
///
/// Each entry ties a pair of schema titles (the form used to *request* a job and
/// the form used to mark it *complete*) to the e-mail templates sent when those
/// forms are submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequestConf {
    #[serde(default)]
    pub conf_list: Vec<JobRequestEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRequestEntry {
    pub request_schema_title: String,
    pub complete_schema_title: String,
    pub submit_button_text: String,

    /// Form field holding the requester's e-mail address.
    pub requester_email_keyword: String,
    pub requester_name_keyword: String,
    /// Form field holding the chosen operator's display name.
    pub operator_name_keyword: String,

    /// SMTP relay host, contacted over implicit TLS.
    pub smtp: String,
    pub from: String,
    /// Operator name (spaces replaced by `_`) → e-mail address.
    pub operators: BTreeMap<String, String>,
    pub responsible_operator_email: String,

    pub confirmation_email_subject: String,
    pub confirmation_header_text: String,
    pub request_received_email_subject: String,
    pub request_received_header_text: String,
    pub request_accepted_subject: String,
    pub request_accepted_header_text: String,
}

impl JobRequestEntry {
    pub fn matches_title(&self, title: &str) -> bool {
        self.complete_schema_title == title || self.request_schema_title == title
    }
}

impl JobRequestConf {
    /// Returns the entry for a schema title. When several entries match, the
    /// last one in the file wins.
    pub fn entry_for_title(&self, title: &str) -> Option<&JobRequestEntry> {
        self.conf_list.iter().rev().find(|e| e.matches_title(title))
    }
}
