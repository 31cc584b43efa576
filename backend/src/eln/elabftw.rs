use super::{ElnClient, ElnError, ElnTarget, UploadFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;

/// eLabFTW API v1 over HTTP. The token goes verbatim into `Authorization`.
#[derive(Clone, Default)]
pub struct ElabFtwClient {
    http: reqwest::Client,
}

impl ElabFtwClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    fn post(&self, target: &ElnTarget, path: &str) -> RequestBuilder {
        self.http
            .post(target.url(path))
            .header("Authorization", &target.token)
    }

    async fn send(request: RequestBuilder) -> Result<Response, ElnError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ElnError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ElnClient for ElabFtwClient {
    async fn create_experiment(&self, target: &ElnTarget) -> Result<i64, ElnError> {
        let response = Self::send(self.post(target, "experiments")).await?;
        let body: Value = response.json().await?;
        body.get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ElnError::UnexpectedResponse(body.to_string()))
    }

    async fn update_experiment(
        &self,
        target: &ElnTarget,
        id: i64,
        title: &str,
        body: &str,
    ) -> Result<(), ElnError> {
        let request = self
            .post(target, &format!("experiments/{}", id))
            .form(&[("title", title), ("body", body)]);
        Self::send(request).await?;
        Ok(())
    }

    async fn upload_file(
        &self,
        target: &ElnTarget,
        id: i64,
        file: UploadFile,
    ) -> Result<(), ElnError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.mime)?;
        let request = self
            .post(target, &format!("experiments/{}", id))
            .multipart(Form::new().part("file", part));
        Self::send(request).await?;
        Ok(())
    }

    async fn add_tag(&self, target: &ElnTarget, id: i64, tag: &str) -> Result<(), ElnError> {
        let request = self
            .post(target, &format!("experiments/{}", id))
            .form(&[("tag", tag)]);
        Self::send(request).await?;
        Ok(())
    }

    async fn list_tags(&self, target: &ElnTarget) -> Result<Value, ElnError> {
        let request = self
            .http
            .get(target.url("tags"))
            .header("Authorization", &target.token);
        let response = Self::send(request).await?;
        Ok(response.json().await?)
    }
}
