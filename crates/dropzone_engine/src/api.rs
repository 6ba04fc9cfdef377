use std::time::Duration;

use dropzone_core::{FileCandidate, Job, PDF_MIME_TYPE};
use dropzone_logging::{dz_debug, dz_info};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub upload_path: String,
    pub jobs_path: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_path: "/api/upload".to_string(),
            jobs_path: "/api/jobs".to_string(),
            request_timeout: None,
        }
    }
}

/// Backend operations the widget needs.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// Submits one file and returns the job the backend created for it.
    async fn upload(&self, file: &FileCandidate) -> Result<Job, ApiError>;

    /// Returns at most `limit` jobs, most recent first as the backend orders them.
    async fn list_jobs(&self, limit: usize) -> Result<Vec<Job>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsApi {
    client: reqwest::Client,
    upload_url: Url,
    jobs_url: Url,
}

impl ReqwestJobsApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{}: {err}", settings.base_url)))?;
        let upload_url = join(&base, &settings.upload_path)?;
        let jobs_url = join(&base, &settings.jobs_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            upload_url,
            jobs_url,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn jobs_url(&self) -> &Url {
        &self.jobs_url
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestJobsApi {
    async fn upload(&self, file: &FileCandidate) -> Result<Job, ApiError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| ApiError::ReadFile {
                path: file.path.clone(),
                source,
            })?;
        dz_debug!("POST {} file={} bytes={}", self.upload_url, file.name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(PDF_MIME_TYPE)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UploadStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let job: Job = serde_json::from_slice(&body)?;
        dz_info!("Uploaded {} as job #{} ({})", file.name, job.id, job.status);
        Ok(job)
    }

    async fn list_jobs(&self, limit: usize) -> Result<Vec<Job>, ApiError> {
        let mut url = self.jobs_url.clone();
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        dz_debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ListStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path)
        .map_err(|err| ApiError::InvalidUrl(format!("{path}: {err}")))
}
