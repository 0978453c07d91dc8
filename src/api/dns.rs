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

//! Edge DNS API (`/config-dns/v2`).

use serde::{Deserialize, Serialize};

use super::{Client, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub zone: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(default)]
    pub masters: Vec<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub sign_and_serve: bool,
    #[serde(default)]
    pub activation_state: String,
    #[serde(default)]
    pub version_id: String,
}

/// Request body for zone create/update; the server owns the
/// activation state and version.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequest {
    pub zone: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub masters: Vec<String>,
    pub comment: String,
    pub sign_and_serve: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: i64,
    pub rdata: Vec<String>,
}

impl Client {
    pub async fn get_zone(&self, zone: &str) -> Result<Zone> {
        self.get(&format!("/config-dns/v2/zones/{zone}")).await
    }

    pub async fn create_zone(
        &self,
        body: &ZoneRequest,
        contract_id: &str,
        group_id: Option<&str>,
    ) -> Result<Zone> {
        let mut path = format!("/config-dns/v2/zones?contractId={contract_id}");
        if let Some(group_id) = group_id {
            path.push_str(&format!("&gid={group_id}"));
        }
        self.post(&path, body).await
    }

    pub async fn update_zone(&self, body: &ZoneRequest) -> Result<Zone> {
        self.put(&format!("/config-dns/v2/zones/{}", body.zone), body)
            .await
    }

    pub async fn delete_zone(&self, zone: &str) -> Result<()> {
        self.delete(&format!("/config-dns/v2/zones/{zone}")).await
    }

    pub async fn get_record_set(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSet> {
        self.get(&record_set_path(zone, name, record_type)).await
    }

    pub async fn create_record_set(&self, zone: &str, body: &RecordSet) -> Result<RecordSet> {
        self.post(&record_set_path(zone, &body.name, &body.record_type), body)
            .await
    }

    pub async fn update_record_set(&self, zone: &str, body: &RecordSet) -> Result<RecordSet> {
        self.put(&record_set_path(zone, &body.name, &body.record_type), body)
            .await
    }

    pub async fn delete_record_set(
        &self,
        zone: &str,
        name: &str,
        record_type: &str,
    ) -> Result<()> {
        self.delete(&record_set_path(zone, name, record_type)).await
    }
}

fn record_set_path(zone: &str, name: &str, record_type: &str) -> String {
    format!("/config-dns/v2/zones/{zone}/names/{name}/types/{record_type}")
}
