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

//! Property Manager API (`/papi/v1`), read-only surface.

use serde::{Deserialize, Serialize};

use super::{Client, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_id: String,
    #[serde(default)]
    pub contract_type_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub parent_group_id: Option<String>,
    #[serde(default)]
    pub contract_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Items<T> {
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ContractsEnvelope {
    contracts: Items<Contract>,
}

#[derive(Debug, Deserialize)]
struct GroupsEnvelope {
    groups: Items<Group>,
}

impl Client {
    pub async fn list_contracts(&self) -> Result<Vec<Contract>> {
        let envelope: ContractsEnvelope = self.get("/papi/v1/contracts").await?;
        Ok(envelope.contracts.items)
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let envelope: GroupsEnvelope = self.get("/papi/v1/groups").await?;
        Ok(envelope.groups.items)
    }
}
