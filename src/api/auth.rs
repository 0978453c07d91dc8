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

//! EdgeGrid V1 request signing (`EG1-HMAC-SHA256`).

use crypto::{digest::Digest, hmac::Hmac, mac::Mac, sha2::Sha256};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use super::edgerc::Credentials;
use super::{ApiError, Result};

const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year][month][day]T[hour]:[minute]:[second]+0000");

const NONCE_LEN: usize = 32;

pub(super) struct Signer<'a> {
    credentials: &'a Credentials,
}

impl<'a> Signer<'a> {
    pub(super) fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Produce the `Authorization` header value for one request.
    pub(super) fn sign(&self, method: &str, url: &reqwest::Url, body: &[u8]) -> Result<String> {
        let timestamp = OffsetDateTime::now_utc()
            .format(TIMESTAMP_FORMAT)
            .map_err(|err| ApiError::Sign(err.to_string()))?;
        Ok(self.sign_at(method, url, body, &timestamp, &nonce()))
    }

    /// Deterministic signing core, timestamp and nonce supplied by the
    /// caller.
    pub(super) fn sign_at(
        &self,
        method: &str,
        url: &reqwest::Url,
        body: &[u8],
        timestamp: &str,
        nonce: &str,
    ) -> String {
        let auth_header = format!(
            "EG1-HMAC-SHA256 client_token={};access_token={};timestamp={};nonce={};",
            self.credentials.client_token, self.credentials.access_token, timestamp, nonce,
        );

        let path_and_query = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_owned(),
        };

        // Tab-joined canonical request: method, scheme, host,
        // path+query, canonical headers (none are signed), content
        // hash, then the partial auth header itself.
        let data_to_sign = format!(
            "{}\t{}\t{}\t{}\t\t{}\t{}",
            method.to_ascii_uppercase(),
            url.scheme(),
            url.host_str().unwrap_or(self.credentials.host.as_str()),
            path_and_query,
            self.content_hash(method, body),
            auth_header,
        );

        let signing_key = base64_hmac_sha256(self.credentials.client_secret.as_bytes(), timestamp);
        let signature = base64_hmac_sha256(signing_key.as_bytes(), &data_to_sign);

        format!("{auth_header}signature={signature}")
    }

    /// Base64 SHA-256 of the request body, only for methods that carry
    /// one, truncated to the negotiated `max_body` size.
    fn content_hash(&self, method: &str, body: &[u8]) -> String {
        if body.is_empty() || method.eq_ignore_ascii_case("GET") {
            return String::new();
        }
        let take = body.len().min(self.credentials.max_body);
        let mut digest = Sha256::new();
        digest.input(&body[..take]);
        let mut out = vec![0u8; digest.output_bytes()];
        digest.result(&mut out);
        base64_encode(&out)
    }
}

fn nonce() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

fn base64_hmac_sha256(key: &[u8], data: &str) -> String {
    let mut mac = Hmac::new(Sha256::new(), key);
    mac.input(data.as_bytes());
    base64_encode(mac.result().code())
}

fn base64_encode(bytes: &[u8]) -> String {
    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            host: "akaa-test.luna.akamaiapis.net".into(),
            client_token: "akab-client-token".into(),
            client_secret: "client-secret".into(),
            access_token: "akab-access-token".into(),
            max_body: 2048,
        }
    }

    fn url(path: &str) -> reqwest::Url {
        format!("https://akaa-test.luna.akamaiapis.net{path}")
            .parse()
            .unwrap()
    }

    const TS: &str = "20240301T12:00:00+0000";
    const NONCE: &str = "aaaaaaaabbbbbbbbccccccccdddddddd";

    #[test]
    fn header_carries_all_auth_fields() {
        let creds = credentials();
        let header =
            Signer::new(&creds).sign_at("GET", &url("/cloud-wrapper/v1/locations"), b"", TS, NONCE);
        assert!(header.starts_with("EG1-HMAC-SHA256 client_token=akab-client-token;"));
        assert!(header.contains("access_token=akab-access-token;"));
        assert!(header.contains(&format!("timestamp={TS};")));
        assert!(header.contains(&format!("nonce={NONCE};")));
        let signature = header.rsplit("signature=").next().unwrap();
        assert!(!signature.is_empty());
    }

    #[test]
    fn signing_is_deterministic_for_fixed_inputs() {
        let creds = credentials();
        let signer = Signer::new(&creds);
        let target = url("/papi/v1/contracts");
        let first = signer.sign_at("GET", &target, b"", TS, NONCE);
        let second = signer.sign_at("GET", &target, b"", TS, NONCE);
        assert_eq!(first, second);
    }

    #[test]
    fn body_participates_in_signature() {
        let creds = credentials();
        let signer = Signer::new(&creds);
        let target = url("/cloud-wrapper/v1/configurations");
        let empty = signer.sign_at("POST", &target, b"", TS, NONCE);
        let with_body = signer.sign_at("POST", &target, br#"{"configName":"x"}"#, TS, NONCE);
        assert_ne!(empty, with_body);
    }

    #[test]
    fn query_participates_in_signature() {
        let creds = credentials();
        let signer = Signer::new(&creds);
        let bare = signer.sign_at("GET", &url("/papi/v1/groups"), b"", TS, NONCE);
        let with_query = signer.sign_at("GET", &url("/papi/v1/groups?contractId=ctr_1"), b"", TS, NONCE);
        assert_ne!(bare, with_query);
    }

    #[test]
    fn body_hash_stops_at_max_body() {
        let mut creds = credentials();
        creds.max_body = 8;
        let signer = Signer::new(&creds);
        let target = url("/cloud-wrapper/v1/configurations");
        // Same first 8 bytes, different tails: the signatures must match.
        let a = signer.sign_at("PUT", &target, b"12345678AAAA", TS, NONCE);
        let b = signer.sign_at("PUT", &target, b"12345678BBBB", TS, NONCE);
        assert_eq!(a, b);
    }
}
