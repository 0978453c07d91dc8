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
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::api::{configured, SharedClient};
use crate::utils::{string_value, WithNormalize, WithSchema, WithValidate};

use super::state::ZoneState;

#[derive(Debug, Default)]
pub struct ZoneResource {
    client: SharedClient,
}

impl ZoneResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

impl<'a> WithNormalize for ZoneState<'a> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.masters.is_null() {
            self.masters = Value::Value(Vec::new());
        }
        if self.comment.is_null() {
            self.comment = Value::Value("".into());
        }
        if self.sign_and_serve.is_null() {
            self.sign_and_serve = Value::Value(false);
        }
    }
}

#[async_trait]
impl Resource for ZoneResource {
    type State<'a> = ZoneState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ZoneState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags, Default::default()).await;

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = configured(&self.client, diags).await?;
        let zone = state.zone.as_str().to_owned();
        if zone.is_empty() {
            diags.error_short("Zone name is empty", AttributePath::new("zone"));
            return None;
        }

        match client.get_zone(&zone).await {
            Ok(remote) => {
                let mut state = state.clone();
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                diags.root_warning(
                    "Zone no longer exists",
                    format!("Zone `{zone}` was removed outside of Terraform; it is dropped from state"),
                );
                None
            }
            Err(err) => {
                diags.root_error("Failed to read zone", err.to_string());
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state.clone();
        state.normalize(diags);
        state.activation_state = Value::Unknown;
        state.version_id = Value::Unknown;

        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<AttributePath>,
    )> {
        let mut state = proposed_state.clone();
        state.normalize(diags);

        // Identity and placement are immutable on the service side.
        let mut trigger_replace = Vec::new();
        if state.zone != prior_state.zone {
            trigger_replace.push(AttributePath::new("zone"));
        }
        if state.zone_type != prior_state.zone_type {
            trigger_replace.push(AttributePath::new("type"));
        }
        if state.contract_id != prior_state.contract_id {
            trigger_replace.push(AttributePath::new("contract_id"));
        }
        if state.group != prior_state.group {
            trigger_replace.push(AttributePath::new("group"));
        }

        if state.request() == prior_state.request() {
            state.activation_state = prior_state.activation_state.clone();
            state.version_id = prior_state.version_id.clone();
        } else {
            state.activation_state = Value::Unknown;
            state.version_id = Value::Unknown;
        }

        Some((state, prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = configured(&self.client, diags).await?;

        let mut state = planned_state.clone();
        state.normalize(diags);

        let request = state.request();
        let contract_id = state.contract_id.as_str().to_owned();
        let group = state.group.as_deref_option().map(str::to_owned);

        match client
            .create_zone(&request, &contract_id, group.as_deref())
            .await
        {
            Ok(remote) => {
                tracing::info!(zone = %remote.zone, "created Edge DNS zone");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create zone", err.to_string());
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = planned_state.clone();
        state.normalize(diags);

        if state.request() == prior_state.request() {
            tracing::debug!("zone unchanged, skipping update call");
            state.activation_state = prior_state.activation_state.clone();
            state.version_id = prior_state.version_id.clone();
            return Some((state, private_state));
        }

        let client = configured(&self.client, diags).await?;
        match client.update_zone(&state.request()).await {
            Ok(remote) => {
                tracing::info!(zone = %remote.zone, "updated Edge DNS zone");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update zone", err.to_string());
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let client = configured(&self.client, diags).await?;
        let zone = state.zone.as_str();

        match client.delete_zone(zone).await {
            Ok(()) => {
                tracing::info!(zone, "deleted Edge DNS zone");
                Some(())
            }
            Err(err) if err.is_not_found() => Some(()),
            Err(err) => {
                diags.root_error("Failed to delete zone", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let zone = id.trim();
        if zone.is_empty() {
            diags.root_error("Invalid import id", "Expected the fully qualified zone name");
            return None;
        }

        let state = ZoneState {
            zone: string_value(zone),
            ..Default::default()
        };
        Some((state, Value::Null))
    }
}
