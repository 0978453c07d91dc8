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

use std::time::Duration;

use async_trait::async_trait;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::api::{configured, SharedClient};
use crate::poll::{wait_for, WaitError};
use crate::utils::{WithNormalize, WithSchema, WithValidate};

use super::state::ConfigurationState;
use super::{parse_config_id, wait_deadline};

const DELETE_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_DELETE_TIMEOUT: Duration = Duration::from_secs(20 * 60);

#[derive(Debug, Default)]
pub struct ConfigurationResource {
    client: SharedClient,
}

impl ConfigurationResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Resource for ConfigurationResource {
    type State<'a> = ConfigurationState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ConfigurationState::schema())
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
        let Some(config_id) = parse_config_id(&state.id) else {
            diags.root_error(
                "Invalid configuration id",
                format!("`{}` is not a numeric configuration id", state.id.as_str()),
            );
            return None;
        };

        match client.get_configuration(config_id).await {
            Ok(remote) => {
                let mut state = state.clone();
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                diags.root_warning(
                    "Configuration no longer exists",
                    "The configuration was removed outside of Terraform; it is dropped from state",
                );
                None
            }
            Err(err) => {
                diags.root_error("Failed to read configuration", err.to_string());
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
        state.id = Value::Unknown;
        state.status = Value::Unknown;
        state.revision = state.planned_revision();

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
        state.id = prior_state.id.clone();

        // The service cannot rename a configuration or move it across
        // contracts.
        let mut trigger_replace = Vec::new();
        if state.config_name != prior_state.config_name {
            trigger_replace.push(AttributePath::new("config_name"));
        }
        if state.contract_id != prior_state.contract_id {
            trigger_replace.push(AttributePath::new("contract_id"));
        }

        let revision = state.planned_revision();
        if !revision.is_unknown() && revision == prior_state.revision {
            // Nothing the service cares about changed.
            state.status = prior_state.status.clone();
        } else {
            state.status = Value::Unknown;
        }
        state.revision = revision;

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

        let Some(request) = state.request() else {
            diags.root_error(
                "Cannot create configuration",
                "The configuration still contains unknown values at apply time",
            );
            return None;
        };

        match client.create_configuration(&request).await {
            Ok(remote) => {
                tracing::info!(config_id = remote.config_id, "created CloudWrapper configuration");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create configuration", err.to_string());
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
        state.id = prior_state.id.clone();

        let revision = state.planned_revision();
        if let (Value::Value(planned), Value::Value(prior)) = (&revision, &prior_state.revision) {
            if planned == prior {
                tracing::debug!("configuration unchanged, skipping update call");
                state.revision = revision.clone();
                state.status = prior_state.status.clone();
                return Some((state, private_state));
            }
        }

        let client = configured(&self.client, diags).await?;
        let Some(config_id) = parse_config_id(&state.id) else {
            diags.root_error(
                "Invalid configuration id",
                format!("`{}` is not a numeric configuration id", state.id.as_str()),
            );
            return None;
        };
        let Some(request) = state.request() else {
            diags.root_error(
                "Cannot update configuration",
                "The configuration still contains unknown values at apply time",
            );
            return None;
        };

        match client.update_configuration(config_id, &request).await {
            Ok(remote) => {
                tracing::info!(config_id, "updated CloudWrapper configuration");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update configuration", err.to_string());
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
        let Some(config_id) = parse_config_id(&state.id) else {
            diags.root_error(
                "Invalid configuration id",
                format!("`{}` is not a numeric configuration id", state.id.as_str()),
            );
            return None;
        };

        if let Err(err) = client.delete_configuration(config_id).await {
            if err.is_not_found() {
                return Some(());
            }
            diags.root_error("Failed to delete configuration", err.to_string());
            return None;
        }

        // Deletion is asynchronous on the service side; wait until the
        // configuration is actually gone.
        let deadline = wait_deadline(&state.wait_timeout_minutes, DEFAULT_DELETE_TIMEOUT);
        let wait = wait_for(
            deadline,
            DELETE_POLL_INTERVAL,
            || {
                let client = client.clone();
                async move {
                    match client.get_configuration(config_id).await {
                        Ok(remote) => Ok(Some(remote)),
                        Err(err) if err.is_not_found() => Ok(None),
                        Err(err) => Err(err),
                    }
                }
            },
            |remote| remote.is_none(),
        )
        .await;

        match wait {
            Ok(_) => {
                tracing::info!(config_id, "deleted CloudWrapper configuration");
                Some(())
            }
            Err(WaitError::Deadline(_)) => {
                diags.root_error(
                    "Timed out waiting for configuration deletion",
                    format!(
                        "The configuration was still present after {} minutes",
                        deadline.as_secs() / 60
                    ),
                );
                None
            }
            Err(WaitError::Fetch(err)) => {
                diags.root_error(
                    "Failed waiting for configuration deletion",
                    err.to_string(),
                );
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let id = id.trim();
        if id.parse::<i64>().is_err() {
            diags.root_error(
                "Invalid import id",
                format!("`{id}` is not a numeric configuration id"),
            );
            return None;
        }

        let state = ConfigurationState {
            id: Value::Value(id.to_owned().into()),
            ..Default::default()
        };
        Some((state, Value::Null))
    }
}
