// This file is part of the terraform-provider-akamai project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Typed Akamai REST client with EdgeGrid request signing.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use tf_provider::Diagnostics;

mod auth;
pub mod cloudwrapper;
pub mod dns;
pub mod edgerc;
pub mod gtm;
pub mod papi;

use auth::Signer;
use edgerc::Credentials;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("api request failed with status {status}: {title}: {detail}")]
    Api {
        status: u16,
        title: String,
        detail: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("incomplete credentials: {0}")]
    Credentials(String),

    #[error("invalid request url: {0}")]
    Url(String),

    #[error("failed to sign request: {0}")]
    Sign(String),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// RFC 7807 problem body returned by the Akamai APIs on failure.
#[derive(Debug, Default, Deserialize)]
struct Problem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    detail: String,
}

/// Cheap-to-clone signed HTTP client. One instance is built at
/// provider configuration time and shared by every resource.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Arc<Credentials>,
}

impl Client {
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            credentials: Arc::new(credentials),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, Vec::new()).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, encode_body(body)?).await
    }

    /// POST whose response body is irrelevant (202/204 endpoints).
    pub(crate) async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::POST, path, encode_body(body)?)
            .await
            .map(|_| ())
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, encode_body(body)?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, Vec::new())
            .await
            .map(|_| ())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        Ok(response.json::<T>().await?)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Vec<u8>,
    ) -> Result<reqwest::Response> {
        let url: reqwest::Url = format!("https://{}{}", self.credentials.host, path)
            .parse()
            .map_err(|_| ApiError::Url(path.to_owned()))?;

        let authorization = Signer::new(&self.credentials).sign(method.as_str(), &url, &body)?;

        tracing::debug!(%method, path, "akamai api request");

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .header(reqwest::header::ACCEPT, "application/json");
        if !body.is_empty() {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_owned()));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let problem: Problem = serde_json::from_str(&text).unwrap_or_default();
            tracing::warn!(%status, title = %problem.title, "akamai api error");
            return Err(ApiError::Api {
                status: status.as_u16(),
                title: if problem.title.is_empty() {
                    status.to_string()
                } else {
                    problem.title
                },
                detail: if problem.detail.is_empty() {
                    text
                } else {
                    problem.detail
                },
            });
        }
        Ok(response)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(body)?)
}

/// Handle through which resources reach the client configured by the
/// provider. Written once during `configure`, read per operation.
pub type SharedClient = Arc<RwLock<Option<Client>>>;

/// Fetch the configured client, or report the canonical diagnostic.
pub async fn configured(handle: &SharedClient, diags: &mut Diagnostics) -> Option<Client> {
    let guard = handle.read().await;
    match guard.as_ref() {
        Some(client) => Some(client.clone()),
        None => {
            diags.root_error(
                "Provider is not configured",
                "The Akamai provider must be configured with EdgeGrid credentials before resources or data sources can be used",
            );
            None
        }
    }
}
