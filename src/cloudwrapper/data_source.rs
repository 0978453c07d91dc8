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
use futures::{stream, StreamExt};

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{DataSource, Diagnostics, Schema};

use crate::api::{configured, SharedClient};
use crate::utils::WithSchema;

use super::parse_config_id;
use super::state::{
    CapacitiesDataState, CapacityEntryObject, ConfigurationDataState, ConfigurationObject,
    ConfigurationsDataState, LocationListObject, LocationsDataState,
};

/// The list endpoint returns summaries; full configurations are
/// hydrated individually, a few at a time.
const HYDRATE_CONCURRENCY: usize = 4;

#[derive(Debug, Default)]
pub struct ConfigurationDataSource {
    client: SharedClient,
}

impl ConfigurationDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for ConfigurationDataSource {
    type State<'a> = ConfigurationDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ConfigurationDataState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(id) = &config.id {
            if id.trim().parse::<i64>().is_err() {
                diags.error_short(
                    "`id` must be a numeric configuration id",
                    tf_provider::AttributePath::new("id"),
                );
                return None;
            }
        }
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = configured(&self.client, diags).await?;
        let Some(config_id) = parse_config_id(&config.id) else {
            diags.root_error(
                "Invalid configuration id",
                format!("`{}` is not a numeric configuration id", config.id.as_str()),
            );
            return None;
        };

        match client.get_configuration(config_id).await {
            Ok(remote) => {
                let mut state = config.clone();
                state.apply_remote(&remote);
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to read configuration", err.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigurationsDataSource {
    client: SharedClient,
}

impl ConfigurationsDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for ConfigurationsDataSource {
    type State<'a> = ConfigurationsDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ConfigurationsDataState::schema())
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

        let summaries = match client.list_configurations().await {
            Ok(summaries) => summaries,
            Err(err) => {
                diags.root_error("Failed to list configurations", err.to_string());
                return None;
            }
        };

        let results = stream::iter(summaries.iter().map(|summary| {
            let client = client.clone();
            let config_id = summary.config_id;
            async move { client.get_configuration(config_id).await }
        }))
        .buffer_unordered(HYDRATE_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

        let mut configurations = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(remote) => configurations.push(remote),
                Err(err) => {
                    diags.root_error("Failed to read configuration", err.to_string());
                    return None;
                }
            }
        }
        // Hydration completes out of order; keep the output stable.
        configurations.sort_by_key(|c| c.config_id);

        let mut state = config.clone();
        state.configurations = Value::Value(
            configurations
                .iter()
                .map(|remote| Value::Value(ConfigurationObject::from_api(remote)))
                .collect(),
        );
        Some(state)
    }
}

#[derive(Debug, Default)]
pub struct LocationsDataSource {
    client: SharedClient,
}

impl LocationsDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for LocationsDataSource {
    type State<'a> = LocationsDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(LocationsDataState::schema())
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

        match client.list_locations().await {
            Ok(locations) => {
                let mut state = config.clone();
                state.locations = Value::Value(
                    locations
                        .iter()
                        .map(|location| Value::Value(LocationListObject::from_api(location)))
                        .collect(),
                );
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to list locations", err.to_string());
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct CapacitiesDataSource {
    client: SharedClient,
}

impl CapacitiesDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for CapacitiesDataSource {
    type State<'a> = CapacitiesDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(CapacitiesDataState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if config.contract_ids == Value::Value(Vec::new()) {
            diags.error_short(
                "`contract_ids` must contain at least one contract id",
                tf_provider::AttributePath::new("contract_ids"),
            );
            return None;
        }
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = configured(&self.client, diags).await?;

        let contract_ids: Vec<String> = config
            .contract_ids
            .iter()
            .flatten()
            .filter_map(|id| id.as_deref_option())
            .map(str::to_owned)
            .collect();
        if contract_ids.is_empty() {
            diags.root_error(
                "No contracts to report on",
                "`contract_ids` must contain at least one contract id",
            );
            return None;
        }

        match client.list_capacities(&contract_ids).await {
            Ok(capacities) => {
                let mut state = config.clone();
                state.capacities = Value::Value(
                    capacities
                        .iter()
                        .map(|capacity| Value::Value(CapacityEntryObject::from_api(capacity)))
                        .collect(),
                );
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to report capacities", err.to_string());
                None
            }
        }
    }
}
