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

use crate::api::cloudwrapper::{ConfigStatus, Configuration};
use crate::api::{configured, Client, SharedClient};
use crate::poll::{wait_for, WaitError};
use crate::utils::{string_value, WithSchema, WithValidate};

use super::state::ActivationState;
use super::wait_deadline;

const ACTIVATION_POLL_INTERVAL: Duration = Duration::from_secs(30);
const DEFAULT_ACTIVATION_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Default)]
pub struct ActivationResource {
    client: SharedClient,
}

impl ActivationResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }

    /// Request activation and poll until the configuration settles.
    async fn activate<'a>(
        &self,
        diags: &mut Diagnostics,
        client: &Client,
        state: &mut ActivationState<'a>,
    ) -> Option<()> {
        let Some(config_id) = state.config_id.as_ref_option().copied() else {
            diags.error_short(
                "`config_id` is not known at apply time",
                AttributePath::new("config_id"),
            );
            return None;
        };

        if let Err(err) = client.activate_configuration(config_id).await {
            diags.root_error("Failed to request activation", err.to_string());
            return None;
        }
        tracing::info!(config_id, "requested CloudWrapper activation");

        let deadline = wait_deadline(&state.wait_timeout_minutes, DEFAULT_ACTIVATION_TIMEOUT);
        let wait = wait_for(
            deadline,
            ACTIVATION_POLL_INTERVAL,
            || {
                let client = client.clone();
                async move { client.get_configuration(config_id).await }
            },
            |remote: &Configuration| {
                matches!(remote.status, ConfigStatus::Active | ConfigStatus::Failed)
            },
        )
        .await;

        match wait {
            Ok(remote) if remote.status == ConfigStatus::Active => {
                state.status = string_value(remote.status.as_str());
                Some(())
            }
            Ok(remote) => {
                diags.root_error(
                    "Activation failed",
                    format!("The configuration ended in status {}", remote.status),
                );
                None
            }
            Err(WaitError::Deadline(_)) => {
                diags.root_error(
                    "Timed out waiting for activation",
                    format!(
                        "The configuration did not become active within {} minutes",
                        deadline.as_secs() / 60
                    ),
                );
                None
            }
            Err(WaitError::Fetch(err)) => {
                diags.root_error("Failed waiting for activation", err.to_string());
                None
            }
        }
    }
}

#[async_trait]
impl Resource for ActivationResource {
    type State<'a> = ActivationState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ActivationState::schema())
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
        let Some(config_id) = state.config_id.as_ref_option().copied() else {
            return Some((state, private_state));
        };

        match client.get_configuration(config_id).await {
            Ok(remote) => {
                let mut state = state.clone();
                state.status = string_value(remote.status.as_str());
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                diags.root_warning(
                    "Configuration no longer exists",
                    "The activated configuration was removed outside of Terraform; the activation is dropped from state",
                );
                None
            }
            Err(err) => {
                diags.root_error("Failed to read configuration status", err.to_string());
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state.clone();
        state.status = Value::Unknown;

        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
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

        let mut trigger_replace = Vec::new();
        if state.config_id != prior_state.config_id {
            trigger_replace.push(AttributePath::new("config_id"));
        }

        if state.revision == prior_state.revision {
            state.status = prior_state.status.clone();
        } else {
            // A new revision re-activates the configuration.
            state.status = Value::Unknown;
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
        self.activate(diags, &client, &mut state).await?;

        Some((state, private_state))
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

        if state.revision == prior_state.revision {
            // Same revision, nothing to re-activate.
            state.status = prior_state.status.clone();
            return Some((state, private_state));
        }

        let client = configured(&self.client, diags).await?;
        self.activate(diags, &client, &mut state).await?;

        Some((state, private_state))
    }

    async fn destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        // CloudWrapper has no deactivation call; destroying the
        // activation only forgets it.
        tracing::debug!(
            config_id = state.config_id.unwrap_or(0),
            "dropping activation from state"
        );
        Some(())
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        _id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        diags.root_error(
            "Import is not supported",
            "Activations carry no server-side identity of their own; re-create the activation instead",
        );
        None
    }
}
