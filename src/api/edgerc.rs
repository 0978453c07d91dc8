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

//! EdgeGrid credential resolution.
//!
//! Credentials are assembled from three sources, in decreasing
//! precedence: explicit provider attributes, `AKAMAI_*` environment
//! variables, and an `.edgerc`-style credentials file.

use std::path::PathBuf;

use super::{ApiError, Result};

pub const DEFAULT_SECTION: &str = "default";
pub const DEFAULT_MAX_BODY: usize = 131_072;

/// A fully resolved set of EdgeGrid credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
    pub max_body: usize,
}

/// Credentials under construction. Fields stay `None` until some
/// source provides them; merging keeps the first value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCredentials {
    pub host: Option<String>,
    pub client_token: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub max_body: Option<usize>,
}

impl PartialCredentials {
    pub fn or(self, fallback: PartialCredentials) -> Self {
        Self {
            host: self.host.or(fallback.host),
            client_token: self.client_token.or(fallback.client_token),
            client_secret: self.client_secret.or(fallback.client_secret),
            access_token: self.access_token.or(fallback.access_token),
            max_body: self.max_body.or(fallback.max_body),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.host.is_some()
            && self.client_token.is_some()
            && self.client_secret.is_some()
            && self.access_token.is_some()
    }

    /// Read `AKAMAI_<SECTION>_*` variables, falling back to the
    /// unprefixed `AKAMAI_*` forms.
    pub fn from_env(section: &str) -> Self {
        let prefix = env_prefix(section);
        let var = |suffix: &str| {
            std::env::var(format!("{prefix}_{suffix}"))
                .or_else(|_| std::env::var(format!("AKAMAI_{suffix}")))
                .ok()
                .filter(|v| !v.is_empty())
        };
        Self {
            host: var("HOST").map(normalize_host),
            client_token: var("CLIENT_TOKEN"),
            client_secret: var("CLIENT_SECRET"),
            access_token: var("ACCESS_TOKEN"),
            max_body: var("MAX_SIZE").and_then(|v| v.parse().ok()),
        }
    }

    /// Parse one `[section]` of an `.edgerc`-style file.
    pub fn from_edgerc(contents: &str, section: &str) -> Result<Self> {
        let mut creds = Self::default();
        let mut in_section = false;
        let mut seen = false;

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                in_section = name.trim() == section;
                seen = seen || in_section;
                continue;
            }
            if !in_section {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "host" => creds.host = Some(normalize_host(value.to_owned())),
                "client_token" => creds.client_token = Some(value.to_owned()),
                "client_secret" => creds.client_secret = Some(value.to_owned()),
                "access_token" => creds.access_token = Some(value.to_owned()),
                "max_body" | "max-body" => creds.max_body = value.parse().ok(),
                _ => {}
            }
        }

        if !seen {
            return Err(ApiError::Credentials(format!(
                "section `{section}` not found in the credentials file"
            )));
        }
        Ok(creds)
    }

    pub fn into_credentials(self) -> Result<Credentials> {
        let mut missing = Vec::new();
        if self.host.is_none() {
            missing.push("host");
        }
        if self.client_token.is_none() {
            missing.push("client_token");
        }
        if self.client_secret.is_none() {
            missing.push("client_secret");
        }
        if self.access_token.is_none() {
            missing.push("access_token");
        }
        if !missing.is_empty() {
            return Err(ApiError::Credentials(format!(
                "missing {}",
                missing.join(", ")
            )));
        }
        Ok(Credentials {
            host: self.host.unwrap_or_default(),
            client_token: self.client_token.unwrap_or_default(),
            client_secret: self.client_secret.unwrap_or_default(),
            access_token: self.access_token.unwrap_or_default(),
            max_body: self.max_body.unwrap_or(DEFAULT_MAX_BODY),
        })
    }
}

/// Resolve credentials with precedence explicit > environment > file.
/// The file is only consulted when the cheaper sources leave gaps.
pub fn resolve(
    explicit: PartialCredentials,
    edgerc: Option<&str>,
    section: &str,
) -> Result<Credentials> {
    let mut merged = explicit.or(PartialCredentials::from_env(section));
    if !merged.is_complete() {
        let path = edgerc_path(edgerc);
        let contents = std::fs::read_to_string(&path).map_err(|err| {
            ApiError::Credentials(format!(
                "could not read credentials file `{}`: {err}",
                path.display()
            ))
        })?;
        merged = merged.or(PartialCredentials::from_edgerc(&contents, section)?);
    }
    merged.into_credentials()
}

fn edgerc_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var("AKAMAI_EDGERC") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    let mut path = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    path.push(".edgerc");
    path
}

fn env_prefix(section: &str) -> String {
    let section: String = section
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("AKAMAI_{section}")
}

/// `.edgerc` files routinely carry the scheme and a trailing slash in
/// the host entry; the signer wants the bare authority.
pub(crate) fn normalize_host(host: String) -> String {
    host.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_owned()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const EDGERC: &str = r#"
; ignored comment
[default]
host = https://akaa-default.luna.akamaiapis.net/
client_token = akab-client-default
client_secret = secret-default
access_token = akab-access-default

[papi]
# another comment
host = akaa-papi.luna.akamaiapis.net
client_token = akab-client-papi
client_secret = secret-papi
access_token = akab-access-papi
max_body = 65536
"#;

    #[test]
    fn edgerc_default_section() {
        let creds = PartialCredentials::from_edgerc(EDGERC, "default")
            .unwrap()
            .into_credentials()
            .unwrap();
        assert_eq!(creds.host, "akaa-default.luna.akamaiapis.net");
        assert_eq!(creds.client_token, "akab-client-default");
        assert_eq!(creds.max_body, DEFAULT_MAX_BODY);
    }

    #[test]
    fn edgerc_named_section() {
        let creds = PartialCredentials::from_edgerc(EDGERC, "papi")
            .unwrap()
            .into_credentials()
            .unwrap();
        assert_eq!(creds.host, "akaa-papi.luna.akamaiapis.net");
        assert_eq!(creds.client_secret, "secret-papi");
        assert_eq!(creds.max_body, 65536);
    }

    #[test]
    fn edgerc_missing_section() {
        let err = PartialCredentials::from_edgerc(EDGERC, "gtm").unwrap_err();
        assert!(err.to_string().contains("section `gtm` not found"));
    }

    #[test]
    fn incomplete_credentials_name_missing_fields() {
        let partial = PartialCredentials {
            host: Some("example.akamaiapis.net".into()),
            ..Default::default()
        };
        let err = partial.into_credentials().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("client_token"));
        assert!(message.contains("access_token"));
        assert!(!message.contains("host"));
    }

    #[test]
    fn explicit_attributes_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EDGERC.as_bytes()).unwrap();

        let explicit = PartialCredentials {
            host: Some("override.akamaiapis.net".into()),
            ..Default::default()
        };
        let creds = resolve(
            explicit,
            Some(file.path().to_str().unwrap()),
            "papi",
        )
        .unwrap();
        assert_eq!(creds.host, "override.akamaiapis.net");
        assert_eq!(creds.client_token, "akab-client-papi");
    }

    #[test]
    fn env_section_prefix_and_host_normalization() {
        // A section name nobody else uses, to keep the test hermetic.
        std::env::set_var("AKAMAI_ENVTEST42_HOST", "https://env.akamaiapis.net/");
        let creds = PartialCredentials::from_env("envtest42");
        std::env::remove_var("AKAMAI_ENVTEST42_HOST");

        assert_eq!(creds.host.as_deref(), Some("env.akamaiapis.net"));
    }

    #[test]
    fn merge_keeps_the_first_value_seen() {
        let from_env = PartialCredentials {
            client_token: Some("from-env".into()),
            ..Default::default()
        };
        let merged = from_env.or(PartialCredentials::from_edgerc(EDGERC, "papi").unwrap());

        assert_eq!(merged.client_token.as_deref(), Some("from-env"));
        assert_eq!(merged.host.as_deref(), Some("akaa-papi.luna.akamaiapis.net"));
    }
}
