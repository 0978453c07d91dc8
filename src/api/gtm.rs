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

//! Global Traffic Management API (`/config-gtm/v1`).

use serde::{Deserialize, Serialize};

use super::{Client, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropagationStatus {
    Pending,
    Complete,
    Denied,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PropagationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropagationStatus::Pending => "PENDING",
            PropagationStatus::Complete => "COMPLETE",
            PropagationStatus::Denied => "DENIED",
            PropagationStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for PropagationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    #[serde(rename = "type")]
    pub domain_type: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStatus {
    #[serde(default)]
    pub propagation_status: PropagationStatus,
    #[serde(default)]
    pub message: String,
}

/// Mutations return the resource together with its change status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub resource: Domain,
    #[serde(default)]
    pub status: DomainStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub datacenter_id: i64,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub continent: String,
    #[serde(rename = "virtual", default)]
    pub virtual_datacenter: bool,
}

impl Client {
    pub async fn get_domain(&self, name: &str) -> Result<Domain> {
        self.get(&format!("/config-gtm/v1/domains/{name}")).await
    }

    pub async fn create_domain(&self, body: &Domain) -> Result<DomainResponse> {
        self.post("/config-gtm/v1/domains", body).await
    }

    pub async fn update_domain(&self, body: &Domain) -> Result<DomainResponse> {
        self.put(&format!("/config-gtm/v1/domains/{}", body.name), body)
            .await
    }

    pub async fn delete_domain(&self, name: &str) -> Result<()> {
        self.delete(&format!("/config-gtm/v1/domains/{name}")).await
    }

    pub async fn get_domain_status(&self, name: &str) -> Result<DomainStatus> {
        self.get(&format!("/config-gtm/v1/domains/{name}/status/current"))
            .await
    }

    pub async fn get_datacenter(&self, domain: &str, datacenter_id: i64) -> Result<Datacenter> {
        self.get(&format!(
            "/config-gtm/v1/domains/{domain}/datacenters/{datacenter_id}"
        ))
        .await
    }
}
