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

//! CloudWrapper API (`/cloud-wrapper/v1`).

use serde::{Deserialize, Serialize};

use super::{Client, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigStatus {
    Active,
    Saving,
    InProgress,
    DeleteInProgress,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ConfigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigStatus::Active => "ACTIVE",
            ConfigStatus::Saving => "SAVING",
            ConfigStatus::InProgress => "IN_PROGRESS",
            ConfigStatus::DeleteInProgress => "DELETE_IN_PROGRESS",
            ConfigStatus::Failed => "FAILED",
            ConfigStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ConfigStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigLocation {
    pub traffic_type_id: i64,
    #[serde(default)]
    pub comments: String,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub config_id: i64,
    pub config_name: String,
    pub contract_id: String,
    #[serde(default)]
    pub property_ids: Vec<String>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub notification_emails: Vec<String>,
    #[serde(default)]
    pub retain_idle_objects: bool,
    #[serde(default)]
    pub capacity_alerts_threshold: Option<i64>,
    #[serde(default)]
    pub locations: Vec<ConfigLocation>,
    #[serde(default)]
    pub status: ConfigStatus,
}

/// Request body for create/update. Identical to [`Configuration`]
/// minus the server-owned fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    pub config_name: String,
    pub contract_id: String,
    pub property_ids: Vec<String>,
    pub comments: String,
    pub notification_emails: Vec<String>,
    pub retain_idle_objects: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_alerts_threshold: Option<i64>,
    pub locations: Vec<ConfigLocation>,
}

impl ConfigurationRequest {
    /// The request that would reproduce `remote` as-is.
    pub fn from_remote(remote: &Configuration) -> Self {
        Self {
            config_name: remote.config_name.clone(),
            contract_id: remote.contract_id.clone(),
            property_ids: remote.property_ids.clone(),
            comments: remote.comments.clone(),
            notification_emails: remote.notification_emails.clone(),
            retain_idle_objects: remote.retain_idle_objects,
            capacity_alerts_threshold: remote.capacity_alerts_threshold,
            locations: remote.locations.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigurationList {
    configurations: Vec<Configuration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficType {
    pub traffic_type_id: i64,
    pub traffic_type: String,
    #[serde(default)]
    pub map_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: i64,
    pub location_name: String,
    #[serde(default)]
    pub multi_cdn_location_id: String,
    #[serde(default)]
    pub traffic_types: Vec<TrafficType>,
}

#[derive(Debug, Deserialize)]
struct LocationList {
    locations: Vec<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCapacity {
    pub location_id: i64,
    pub contract_id: String,
    #[serde(rename = "type", default)]
    pub capacity_type: String,
    pub approved: Capacity,
    pub assigned: Capacity,
    pub unassigned: Capacity,
}

#[derive(Debug, Deserialize)]
struct CapacityList {
    capacities: Vec<LocationCapacity>,
}

#[derive(Debug, Serialize)]
struct Empty {}

impl Client {
    pub async fn list_configurations(&self) -> Result<Vec<Configuration>> {
        let list: ConfigurationList = self.get("/cloud-wrapper/v1/configurations").await?;
        Ok(list.configurations)
    }

    pub async fn get_configuration(&self, config_id: i64) -> Result<Configuration> {
        self.get(&format!("/cloud-wrapper/v1/configurations/{config_id}"))
            .await
    }

    pub async fn create_configuration(
        &self,
        body: &ConfigurationRequest,
    ) -> Result<Configuration> {
        self.post("/cloud-wrapper/v1/configurations", body).await
    }

    pub async fn update_configuration(
        &self,
        config_id: i64,
        body: &ConfigurationRequest,
    ) -> Result<Configuration> {
        self.put(&format!("/cloud-wrapper/v1/configurations/{config_id}"), body)
            .await
    }

    pub async fn delete_configuration(&self, config_id: i64) -> Result<()> {
        self.delete(&format!("/cloud-wrapper/v1/configurations/{config_id}"))
            .await
    }

    pub async fn activate_configuration(&self, config_id: i64) -> Result<()> {
        self.post_empty(
            &format!("/cloud-wrapper/v1/configurations/{config_id}/activations"),
            &Empty {},
        )
        .await
    }

    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        let list: LocationList = self.get("/cloud-wrapper/v1/locations").await?;
        Ok(list.locations)
    }

    pub async fn list_capacities(&self, contract_ids: &[String]) -> Result<Vec<LocationCapacity>> {
        let query = contract_ids.join(",");
        let list: CapacityList = self
            .get(&format!("/cloud-wrapper/v1/capacity?contractIds={query}"))
            .await?;
        Ok(list.capacities)
    }
}
