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
use tf_provider::{AttributePath, DataSource, Diagnostics, Schema};

use crate::api::{configured, SharedClient};
use crate::utils::WithSchema;

use super::state::DatacenterDataState;

#[derive(Debug, Default)]
pub struct DatacenterDataSource {
    client: SharedClient,
}

impl DatacenterDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for DatacenterDataSource {
    type State<'a> = DatacenterDataState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(DatacenterDataState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(datacenter_id) = &config.datacenter_id {
            if *datacenter_id <= 0 {
                diags.error_short(
                    "`datacenter_id` must be positive",
                    AttributePath::new("datacenter_id"),
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

        let Some(datacenter_id) = config.datacenter_id.as_ref_option().copied() else {
            diags.error_short(
                "`datacenter_id` must be known",
                AttributePath::new("datacenter_id"),
            );
            return None;
        };

        match client
            .get_datacenter(config.domain.as_str(), datacenter_id)
            .await
        {
            Ok(remote) => {
                let mut state = config.clone();
                state.apply_remote(&remote);
                Some(state)
            }
            Err(err) => {
                diags.root_error("Failed to read datacenter", err.to_string());
                None
            }
        }
    }
}
