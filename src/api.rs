// ABOUTME: HTTP client for the slide generator service
// ABOUTME: Lists templates, uploads staged files and fetches sample decks

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::model::{SlideDeck, TemplateList};
use crate::staging::StagedFile;
use log::{debug, info};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// The three calls the front end makes against the slide service.
pub trait SlideApi {
    fn list_templates(&self) -> Result<Vec<String>>;
    fn upload(&self, files: &[StagedFile], template_id: &str) -> Result<SlideDeck>;
    fn fetch_sample(&self, template_id: &str) -> Result<SlideDeck>;
}

/// Blocking reqwest implementation of [`SlideApi`]. No retries: each call is
/// one round trip and failures go straight back to the caller.
pub struct ApiClient {
    client: Client,
    base: Url,
}

/// FastAPI error bodies look like `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(DeckError::RequestError)?;
        Ok(Self {
            client,
            base: config.api_base()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &Url) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(DeckError::HttpStatusError {
                status: status.as_u16(),
                url: url.to_string(),
                detail: error_detail(&body),
            });
        }

        debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

impl SlideApi for ApiClient {
    fn list_templates(&self) -> Result<Vec<String>> {
        let url = self.endpoint("templates")?;
        info!("Fetching templates from {}", url);
        let list: TemplateList = self.send_json(self.client.get(url.clone()), &url)?;
        Ok(list.templates)
    }

    fn upload(&self, files: &[StagedFile], template_id: &str) -> Result<SlideDeck> {
        let url = self.endpoint("upload")?;
        info!(
            "Uploading {} file(s) to {} with template {}",
            files.len(),
            url,
            template_id
        );

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.read()?).file_name(file.name.clone());
            form = form.part("files", part);
        }

        let request = self
            .client
            .post(url.clone())
            .query(&[("template_id", template_id)])
            .multipart(form);
        self.send_json(request, &url)
    }

    fn fetch_sample(&self, template_id: &str) -> Result<SlideDeck> {
        let url = self.endpoint("test")?;
        info!("Fetching sample deck from {} with template {}", url, template_id);
        let request = self
            .client
            .get(url.clone())
            .query(&[("template_id", template_id)]);
        self.send_json(request, &url)
    }
}

fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_fastapi_detail() {
        assert_eq!(
            error_detail(r#"{"detail": "Error processing files: bad csv"}"#),
            "Error processing files: bad csv"
        );
        assert_eq!(error_detail("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_detail(""), "no response body");
    }

    #[test]
    fn test_endpoints_join_under_base_path() {
        let config = Config {
            api_base_url: "http://localhost:9000/api".to_string(),
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("templates").unwrap().as_str(),
            "http://localhost:9000/api/templates"
        );
    }
}
