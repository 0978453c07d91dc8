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

use crate::api::gtm::{DomainStatus, PropagationStatus};
use crate::api::{configured, Client, SharedClient};
use crate::poll::{wait_for, WaitError};
use crate::utils::{string_value, WithNormalize, WithSchema};

use super::state::DomainState;

const PROPAGATION_POLL_INTERVAL: Duration = Duration::from_secs(15);
const DEFAULT_PROPAGATION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Default)]
pub struct DomainResource {
    client: SharedClient,
}

impl DomainResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }

    /// Wait for the last change to finish propagating to the GTM name
    /// servers.
    async fn wait_propagated(
        &self,
        diags: &mut Diagnostics,
        client: &Client,
        name: &str,
        deadline: Duration,
    ) -> Option<DomainStatus> {
        let wait = wait_for(
            deadline,
            PROPAGATION_POLL_INTERVAL,
            || {
                let client = client.clone();
                let name = name.to_owned();
                async move { client.get_domain_status(&name).await }
            },
            |status: &DomainStatus| {
                matches!(
                    status.propagation_status,
                    PropagationStatus::Complete | PropagationStatus::Denied
                )
            },
        )
        .await;

        match wait {
            Ok(status) if status.propagation_status == PropagationStatus::Complete => Some(status),
            Ok(status) => {
                diags.root_error("GTM change was denied", status.message);
                None
            }
            Err(WaitError::Deadline(_)) => {
                diags.root_error(
                    "Timed out waiting for GTM propagation",
                    format!(
                        "The domain change did not propagate within {} minutes",
                        deadline.as_secs() / 60
                    ),
                );
                None
            }
            Err(WaitError::Fetch(err)) => {
                diags.root_error("Failed waiting for GTM propagation", err.to_string());
                None
            }
        }
    }
}

impl<'a> WithNormalize for DomainState<'a> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.comment.is_null() {
            self.comment = Value::Value("".into());
        }
    }
}

fn deadline(state: &DomainState<'_>) -> Duration {
    match state.wait_timeout_minutes.as_ref_option() {
        Some(&minutes) if minutes > 0 => Duration::from_secs(minutes as u64 * 60),
        _ => DEFAULT_PROPAGATION_TIMEOUT,
    }
}

#[async_trait]
impl Resource for DomainResource {
    type State<'a> = DomainState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(DomainState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(name) = &config.name {
            if name.is_empty() {
                diags.error_short("`name` must not be empty", AttributePath::new("name"));
            }
        }
        if let Value::Value(domain_type) = &config.domain_type {
            if domain_type.is_empty() {
                diags.error_short("`type` must not be empty", AttributePath::new("type"));
            }
        }

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
        let name = state.name.as_str().to_owned();

        match client.get_domain(&name).await {
            Ok(remote) => {
                let mut state = state.clone();
                state.apply_remote(&remote);
                match client.get_domain_status(&name).await {
                    Ok(status) => {
                        state.status = string_value(status.propagation_status.as_str());
                    }
                    Err(err) => {
                        diags.root_error("Failed to read domain status", err.to_string());
                        return None;
                    }
                }
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                diags.root_warning(
                    "Domain no longer exists",
                    format!("GTM domain `{name}` was removed outside of Terraform; it is dropped from state"),
                );
                None
            }
            Err(err) => {
                diags.root_error("Failed to read domain", err.to_string());
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
        state.status = Value::Unknown;

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

        let mut trigger_replace = Vec::new();
        if state.name != prior_state.name {
            trigger_replace.push(AttributePath::new("name"));
        }
        if state.domain_type != prior_state.domain_type {
            trigger_replace.push(AttributePath::new("type"));
        }

        if state.domain() == prior_state.domain() {
            state.status = prior_state.status.clone();
        } else {
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
        state.normalize(diags);

        match client.create_domain(&state.domain()).await {
            Ok(response) => {
                tracing::info!(name = %response.resource.name, "created GTM domain");
                state.apply_remote(&response.resource);
                let status = self
                    .wait_propagated(diags, &client, &response.resource.name, deadline(&state))
                    .await?;
                state.status = string_value(status.propagation_status.as_str());
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create domain", err.to_string());
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

        if state.domain() == prior_state.domain() {
            tracing::debug!("domain unchanged, skipping update call");
            state.status = prior_state.status.clone();
            return Some((state, private_state));
        }

        let client = configured(&self.client, diags).await?;
        match client.update_domain(&state.domain()).await {
            Ok(response) => {
                tracing::info!(name = %response.resource.name, "updated GTM domain");
                state.apply_remote(&response.resource);
                let status = self
                    .wait_propagated(diags, &client, &response.resource.name, deadline(&state))
                    .await?;
                state.status = string_value(status.propagation_status.as_str());
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update domain", err.to_string());
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
        let name = state.name.as_str();

        match client.delete_domain(name).await {
            Ok(()) => {
                tracing::info!(name, "deleted GTM domain");
                Some(())
            }
            Err(err) if err.is_not_found() => Some(()),
            Err(err) => {
                diags.root_error("Failed to delete domain", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let name = id.trim();
        if name.is_empty() {
            diags.root_error("Invalid import id", "Expected the fully qualified domain name");
            return None;
        }

        let state = DomainState {
            name: string_value(name),
            ..Default::default()
        };
        Some((state, Value::Null))
    }
}
