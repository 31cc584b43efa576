use super::keywords::find_keyword;
use super::MailError;
use chrono::NaiveDate;
use common::model::jobrequest::JobRequestEntry;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;
use serde_json::Value;

/// A JSON document attached to a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `form_data_<date>.json` and `schema_<date>.json`, pretty-printed.
pub fn json_attachments(
    form_data: &Value,
    schema: &Value,
    date: NaiveDate,
) -> Result<Vec<JsonAttachment>, MailError> {
    let stamp = date.format("%d_%b_%Y");
    Ok(vec![
        JsonAttachment {
            file_name: format!("form_data_{}.json", stamp),
            bytes: serde_json::to_vec_pretty(form_data)?,
        },
        JsonAttachment {
            file_name: format!("schema_{}.json", stamp),
            bytes: serde_json::to_vec_pretty(schema)?,
        },
    ])
}

/// Builds an HTML message. Empty addresses in `to` are skipped.
pub fn html_message(
    from: &str,
    to: &[&str],
    subject: &str,
    html: String,
    attachments: &[JsonAttachment],
) -> Result<Message, MailError> {
    let recipients: Vec<&str> = to.iter().map(|a| a.trim()).filter(|a| !a.is_empty()).collect();
    if recipients.is_empty() {
        return Err(MailError::NoRecipients);
    }

    let mut builder = Message::builder()
        .from(from.parse::<Mailbox>()?)
        .subject(subject);
    for address in recipients {
        builder = builder.to(address.parse::<Mailbox>()?);
    }

    if attachments.is_empty() {
        return Ok(builder.header(ContentType::TEXT_HTML).body(html)?);
    }

    let mut parts = MultiPart::mixed().singlepart(SinglePart::html(html));
    for attachment in attachments {
        let mime = mime_guess::from_path(&attachment.file_name).first_or_octet_stream();
        parts = parts.singlepart(
            Attachment::new(attachment.file_name.clone())
                .body(attachment.bytes.clone(), ContentType::parse(mime.as_ref())?),
        );
    }
    Ok(builder.multipart(parts)?)
}

/// The two e-mails sent when a job request is submitted, in sending order:
/// the confirmation to the requester, then the notice to the selected
/// operator and the responsible person.
pub fn job_request_messages(
    entry: &JobRequestEntry,
    form_data: &Value,
    schema: &Value,
    body: &str,
    date: NaiveDate,
) -> Result<Vec<Message>, MailError> {
    let requester = find_keyword(form_data, &entry.requester_email_keyword).unwrap_or_default();
    let operator_name = find_keyword(form_data, &entry.operator_name_keyword).unwrap_or_default();
    let operator = entry
        .operators
        .get(&operator_name.replace(' ', "_"))
        .map(String::as_str)
        .unwrap_or_default();
    if operator.is_empty() {
        log::warn!("no e-mail address configured for operator '{}'", operator_name);
    }

    let attachments = json_attachments(form_data, schema, date)?;

    let confirmation = html_message(
        &entry.from,
        &[&requester],
        &entry.confirmation_email_subject,
        format!("{}{}", entry.confirmation_header_text, body),
        &attachments,
    )?;
    let received = html_message(
        &entry.from,
        &[operator, &entry.responsible_operator_email],
        &entry.request_received_email_subject,
        format!("{}{}", entry.request_received_header_text, body),
        &attachments,
    )?;
    Ok(vec![confirmation, received])
}

/// Tells the requester that their job was accepted, once the experiment has
/// been recorded in the notebook.
pub fn request_accepted_message(
    entry: &JobRequestEntry,
    form_data: &Value,
    body: &str,
) -> Result<Message, MailError> {
    let requester = find_keyword(form_data, &entry.requester_email_keyword).unwrap_or_default();
    html_message(
        &entry.from,
        &[&requester],
        &entry.request_accepted_subject,
        format!("{}{}", entry.request_accepted_header_text, body),
        &[],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry() -> JobRequestEntry {
        JobRequestEntry {
            request_schema_title: "SEM request".into(),
            complete_schema_title: "SEM done".into(),
            requester_email_keyword: "email".into(),
            operator_name_keyword: "operator".into(),
            smtp: "smtp.example.org".into(),
            from: "lab@example.org".into(),
            operators: [("Jane_Doe".to_string(), "jane@example.org".to_string())]
                .into_iter()
                .collect(),
            responsible_operator_email: "head@example.org".into(),
            confirmation_email_subject: "We received your request".into(),
            confirmation_header_text: "<p>Thanks!</p>".into(),
            request_received_email_subject: "New SEM request".into(),
            request_received_header_text: "<p>New request:</p>".into(),
            request_accepted_subject: "Request accepted".into(),
            request_accepted_header_text: "<p>Accepted.</p>".into(),
            ..Default::default()
        }
    }

    fn recipients(message: &Message) -> Vec<String> {
        message
            .envelope()
            .to()
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn builds_confirmation_and_operator_notice() {
        let data = json!({"contact": {"email": "ada@example.org"}, "operator": "Jane Doe"});
        let schema = json!({"title": "SEM request"});

        let messages = job_request_messages(&entry(), &data, &schema, "<ul></ul>", date()).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(recipients(&messages[0]), vec!["ada@example.org"]);
        assert_eq!(
            recipients(&messages[1]),
            vec!["jane@example.org", "head@example.org"]
        );

        let raw = String::from_utf8(messages[0].formatted()).unwrap();
        assert!(raw.contains("Subject: We received your request"));
        assert!(raw.contains("form_data_05_Mar_2024.json"));
        assert!(raw.contains("schema_05_Mar_2024.json"));
        assert!(raw.contains("application/json"));
    }

    #[test]
    fn unknown_operator_still_notifies_responsible_person() {
        let data = json!({"email": "ada@example.org", "operator": "Nobody"});
        let messages =
            job_request_messages(&entry(), &data, &json!({}), "", date()).unwrap();
        assert_eq!(recipients(&messages[1]), vec!["head@example.org"]);
    }

    #[test]
    fn missing_requester_address_fails() {
        let data = json!({"operator": "Jane Doe"});
        assert!(matches!(
            job_request_messages(&entry(), &data, &json!({}), "", date()),
            Err(MailError::NoRecipients)
        ));
    }

    #[test]
    fn invalid_address_fails() {
        let data = json!({"email": "not an address", "operator": "Jane Doe"});
        assert!(matches!(
            job_request_messages(&entry(), &data, &json!({}), "", date()),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn accepted_message_is_plain_html() {
        let data = json!({"email": "ada@example.org"});
        let message = request_accepted_message(&entry(), &data, "<b>body</b>").unwrap();
        assert_eq!(recipients(&message), vec!["ada@example.org"]);
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("Subject: Request accepted"));
        assert!(raw.contains("text/html"));
    }
}
