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
use crate::utils::{string_value, WithSchema, WithValidate};

use super::state::RecordState;

#[derive(Debug, Default)]
pub struct RecordResource {
    client: SharedClient,
}

impl RecordResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

/// Split a `zone:name:record_type` import id.
fn parse_import_id(id: &str) -> Option<(&str, &str, &str)> {
    let mut parts = id.split(':');
    let zone = parts.next()?;
    let name = parts.next()?;
    let record_type = parts.next()?;
    if parts.next().is_some() || zone.is_empty() || name.is_empty() || record_type.is_empty() {
        return None;
    }
    Some((zone, name, record_type))
}

#[async_trait]
impl Resource for RecordResource {
    type State<'a> = RecordState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(RecordState::schema())
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
        let zone = state.zone.as_str();
        let name = state.name.as_str();
        let record_type = state.record_type.as_str();

        match client.get_record_set(zone, name, record_type).await {
            Ok(remote) => {
                let mut state = state.clone();
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                diags.root_warning(
                    "Record set no longer exists",
                    format!(
                        "Record set `{name}` ({record_type}) in zone `{zone}` was removed outside of Terraform; it is dropped from state"
                    ),
                );
                None
            }
            Err(err) => {
                diags.root_error("Failed to read record set", err.to_string());
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
        Some((proposed_state.clone(), Default::default()))
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
        let state = proposed_state.clone();

        // The record set identity is its path; moving it means
        // deleting and recreating it.
        let mut trigger_replace = Vec::new();
        if state.zone != prior_state.zone {
            trigger_replace.push(AttributePath::new("zone"));
        }
        if state.name != prior_state.name {
            trigger_replace.push(AttributePath::new("name"));
        }
        if state.record_type != prior_state.record_type {
            trigger_replace.push(AttributePath::new("record_type"));
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
        let zone = state.zone.as_str().to_owned();

        match client.create_record_set(&zone, &state.record_set()).await {
            Ok(remote) => {
                tracing::info!(zone = %zone, name = %remote.name, "created Edge DNS record set");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create record set", err.to_string());
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = configured(&self.client, diags).await?;

        let mut state = planned_state.clone();
        let zone = state.zone.as_str().to_owned();

        match client.update_record_set(&zone, &state.record_set()).await {
            Ok(remote) => {
                tracing::info!(zone = %zone, name = %remote.name, "updated Edge DNS record set");
                state.apply_remote(&remote);
                Some((state, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update record set", err.to_string());
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

        let result = client
            .delete_record_set(
                state.zone.as_str(),
                state.name.as_str(),
                state.record_type.as_str(),
            )
            .await;

        match result {
            Ok(()) => Some(()),
            Err(err) if err.is_not_found() => Some(()),
            Err(err) => {
                diags.root_error("Failed to delete record set", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Some((zone, name, record_type)) = parse_import_id(&id) else {
            diags.root_error(
                "Invalid import id",
                format!("`{id}` does not match the expected `zone:name:record_type` form"),
            );
            return None;
        };

        let state = RecordState {
            zone: string_value(zone),
            name: string_value(name),
            record_type: string_value(record_type),
            ..Default::default()
        };
        Some((state, Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_import_id;

    #[test]
    fn import_id_round_trip() {
        assert_eq!(
            parse_import_id("example.com:www.example.com:A"),
            Some(("example.com", "www.example.com", "A"))
        );
    }

    #[test]
    fn import_id_rejects_malformed_input() {
        assert_eq!(parse_import_id("example.com"), None);
        assert_eq!(parse_import_id("example.com:www.example.com"), None);
        assert_eq!(parse_import_id("example.com:www.example.com:A:extra"), None);
        assert_eq!(parse_import_id("example.com::A"), None);
        assert_eq!(parse_import_id(""), None);
    }
}
