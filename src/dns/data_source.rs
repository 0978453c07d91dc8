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
use crate::utils::{string_list, WithSchema};

use super::state::RecordDataState;

#[derive(Debug, Default)]
pub struct RecordDataSource {
    client: SharedClient,
}

impl RecordDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for RecordDataSource {
    type State<'a> = RecordDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(RecordDataState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        for (attr, value) in [
            ("zone", &config.zone),
            ("name", &config.name),
            ("record_type", &config.record_type),
        ] {
            if let Value::Value(value) = value {
                if value.is_empty() {
                    diags.error_short(
                        format!("`{attr}` must not be empty"),
                        tf_provider::AttributePath::new(attr),
                    );
                }
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
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let client = configured(&self.client, diags).await?;

        let result = client
            .get_record_set(
                config.zone.as_str(),
                config.name.as_str(),
                config.record_type.as_str(),
            )
            .await;

        match result {
            Ok(remote) => {
                let mut state = config.clone();
                state.ttl = Value::Value(remote.ttl);
                state.rdata = string_list(&remote.rdata);
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to read record set", err.to_string());
                None
            }
        }
    }
}
