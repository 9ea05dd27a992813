// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Google credential verification against the tokeninfo endpoint.

use crate::config::Config;
use crate::error::AppError;
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Subject attributes returned by tokeninfo for a valid credential.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleClaims {
    /// Google subject id
    pub sub: String,
    /// Display name (absent for tokens issued without profile scope)
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Client for the Google tokeninfo boundary service.
///
/// The base URL is configurable so tests can point at a mock server.
#[derive(Clone)]
pub struct GoogleVerifier {
    http: reqwest::Client,
    tokeninfo_url: String,
}

impl GoogleVerifier {
    /// Create a verifier from the configured tokeninfo endpoint.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .context("failed building tokeninfo HTTP client")?;

        Ok(Self {
            http,
            tokeninfo_url: config.google_tokeninfo_url.clone(),
        })
    }

    /// Exchange a raw credential for verified subject attributes.
    ///
    /// Any non-success response means the credential is invalid or expired.
    /// Transport failures are internal faults, not credential failures.
    pub async fn verify_credential(&self, credential: &str) -> Result<GoogleClaims, AppError> {
        let response = self
            .http
            .get(&self.tokeninfo_url)
            .query(&[("id_token", credential)])
            .send()
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("tokeninfo request failed: {}", e))
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Google rejected credential");
            return Err(AppError::InvalidCredential(
                "Invalid Google token".to_string(),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid tokeninfo response: {}", e)))
    }
}
