// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the capture server.
//!
//! All endpoints are plain `GET` requests below `<base>/api/`; file-scoped
//! endpoints take the filename as the `filename` query parameter. Servers
//! protected by an auth file expect HTTP Basic credentials.

use crate::application::port::CaptureBackend;
use crate::catalog::Hierarchy;
use crate::config::Config;
use crate::error::BackendError;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `{"result": "ok"}` body returned by mutating endpoints.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    result: String,
}

/// [`CaptureBackend`] talking to the capture server over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, String)>,
}

impl HttpBackend {
    /// Creates a backend for the server at `base_url`.
    ///
    /// A base URL with a path is treated as a directory, so
    /// `http://host/viewer` serves `http://host/viewer/api/...`.
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("WebcamLens/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            credentials: None,
        })
    }

    /// Creates a backend from the server URL and credentials in `config`.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let backend = Self::new(config.server_url())?;
        Ok(match config.credentials() {
            Some((user, password)) => backend.with_credentials(user, password),
            None => backend,
        })
    }

    /// Sends HTTP Basic credentials with every request.
    pub fn with_credentials(mut self, user: &str, password: &str) -> Self {
        self.credentials = Some((user.to_string(), password.to_string()));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of an API endpoint, with the optional `filename` parameter.
    pub fn endpoint(&self, name: &str, filename: Option<&str>) -> Result<Url, BackendError> {
        let mut url = self
            .base_url
            .join(&format!("api/{name}"))
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        if let Some(filename) = filename {
            url.query_pairs_mut().append_pair("filename", filename);
        }
        Ok(url)
    }

    /// URL a renderer can load the image bytes from.
    pub fn image_url(&self, filename: &str) -> Result<Url, BackendError> {
        self.endpoint("image", Some(filename))
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, BackendError> {
        log::debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password));
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        self.get(url)
            .await?
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn get_ack(&self, url: Url) -> Result<(), BackendError> {
        let ack: Acknowledgement = self.get_json(url).await?;
        if ack.result != "ok" {
            return Err(BackendError::Decode(format!(
                "unexpected acknowledgement: {}",
                ack.result
            )));
        }
        Ok(())
    }
}

impl CaptureBackend for HttpBackend {
    async fn summary(&self) -> Result<Hierarchy, BackendError> {
        self.get_json(self.endpoint("summary", None)?).await
    }

    async fn group_summary(&self, group_key: &str) -> Result<Vec<String>, BackendError> {
        self.get_json(self.endpoint("group_summary", Some(group_key))?)
            .await
    }

    async fn image(&self, filename: &str) -> Result<Vec<u8>, BackendError> {
        let bytes = self.get(self.image_url(filename)?).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn delete_group(&self, filename: &str) -> Result<(), BackendError> {
        self.get_ack(self.endpoint("delete_group", Some(filename))?)
            .await
    }

    async fn metadata_refresh(&self) -> Result<(), BackendError> {
        self.get_ack(self.endpoint("metadata_refresh", None)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_api_path() {
        let backend = HttpBackend::new("http://cam.local:8090").expect("valid url");
        let url = backend.endpoint("summary", None).expect("valid endpoint");
        assert_eq!(url.as_str(), "http://cam.local:8090/api/summary");
    }

    #[test]
    fn filename_is_query_encoded() {
        let backend = HttpBackend::new("http://cam.local:8090/").expect("valid url");
        let url = backend
            .endpoint("group_summary", Some("20200830/02/CAM1 02&x.jpg"))
            .expect("valid endpoint");
        assert_eq!(
            url.query_pairs().next().map(|(k, v)| (k.into_owned(), v.into_owned())),
            Some(("filename".to_string(), "20200830/02/CAM1 02&x.jpg".to_string()))
        );
        assert_eq!(url.path(), "/api/group_summary");
    }

    #[test]
    fn base_path_is_kept() {
        let backend = HttpBackend::new("http://host/viewer").expect("valid url");
        assert_eq!(backend.base_url().as_str(), "http://host/viewer/");
        let url = backend.image_url("a.jpg").expect("valid endpoint");
        assert_eq!(url.as_str(), "http://host/viewer/api/image?filename=a.jpg");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpBackend::new("not a url"),
            Err(BackendError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpBackend::new("mailto:someone@example.com"),
            Err(BackendError::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_config_picks_up_credentials() {
        let config = Config {
            server_url: Some("http://cam.local:8090/".into()),
            username: Some("viewer".into()),
            password: Some("secret".into()),
            ..Config::default()
        };
        let backend = HttpBackend::from_config(&config).expect("valid config");
        assert_eq!(
            backend.credentials,
            Some(("viewer".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn acknowledgement_decodes_result_field() {
        let ack: Acknowledgement =
            serde_json::from_str(r#"{"result": "ok"}"#).expect("valid body");
        assert_eq!(ack.result, "ok");
    }
}
