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

use async_trait::async_trait;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{DataSource, Diagnostics, Schema};

use crate::api::{configured, SharedClient};
use crate::utils::WithSchema;

use super::state::{ContractObject, ContractsDataState, GroupObject, GroupsDataState};

#[derive(Debug, Default)]
pub struct ContractsDataSource {
    client: SharedClient,
}

impl ContractsDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for ContractsDataSource {
    type State<'a> = ContractsDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ContractsDataState::schema())
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = configured(&self.client, diags).await?;

        match client.list_contracts().await {
            Ok(contracts) => {
                let mut state = config.clone();
                state.contracts = Value::Value(
                    contracts
                        .iter()
                        .map(|contract| Value::Value(ContractObject::from_api(contract)))
                        .collect(),
                );
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to list contracts", err.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct GroupsDataSource {
    client: SharedClient,
}

impl GroupsDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for GroupsDataSource {
    type State<'a> = GroupsDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(GroupsDataState::schema())
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = configured(&self.client, diags).await?;

        match client.list_groups().await {
            Ok(groups) => {
                let filter = config.name.as_deref_option();
                let mut state = config.clone();
                state.groups = Value::Value(
                    groups
                        .iter()
                        .filter(|group| filter.map_or(true, |name| group.group_name == name))
                        .map(|group| Value::Value(GroupObject::from_api(group)))
                        .collect(),
                );
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to list groups", err.to_string());
                None
            }
        }
    }
}
