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
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType};
use tf_provider::value::{Value, ValueEmpty, ValueNumber, ValueString};
use tf_provider::{map, Block, Description, Provider, Schema};

use crate::api::edgerc::{self, PartialCredentials, DEFAULT_SECTION};
use crate::api::{Client, SharedClient};
use crate::cloudwrapper::{
    ActivationResource, CapacitiesDataSource, ConfigurationDataSource, ConfigurationResource,
    ConfigurationsDataSource, LocationsDataSource,
};
use crate::dns::{RecordDataSource, RecordResource, ZoneResource};
use crate::gtm::{DatacenterDataSource, DomainResource};
use crate::papi::{ContractsDataSource, GroupsDataSource};

#[derive(Debug, Default, Clone)]
pub struct AkamaiProvider {
    client: SharedClient,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    #[serde(borrow)]
    pub edgerc: ValueString<'a>,
    #[serde(borrow)]
    pub config_section: ValueString<'a>,
    #[serde(borrow)]
    pub host: ValueString<'a>,
    #[serde(borrow)]
    pub client_token: ValueString<'a>,
    #[serde(borrow)]
    pub client_secret: ValueString<'a>,
    #[serde(borrow)]
    pub access_token: ValueString<'a>,
    pub max_body: ValueNumber,
}

fn owned_nonempty(value: &ValueString) -> Option<String> {
    value
        .as_deref_option()
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[async_trait]
impl Provider for AkamaiProvider {
    type Config<'a> = Value<ProviderConfig<'a>>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut tf_provider::Diagnostics) -> Option<tf_provider::Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "edgerc" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Path to the EdgeGrid credentials file, `~/.edgerc` by default"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "config_section" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Section of the credentials file to use"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "host" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("EdgeGrid API host"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "client_token" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("EdgeGrid client token"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "client_secret" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("EdgeGrid client secret"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "access_token" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("EdgeGrid access token"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "max_body" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Largest request body, in bytes, covered by the request signature"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("akamai"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        config: Self::Config<'a>,
    ) -> Option<()> {
        if let Value::Value(config) = &config {
            if let Value::Value(max_body) = &config.max_body {
                if *max_body <= 0 {
                    diags.error_short(
                        "`max_body` must be positive",
                        tf_provider::AttributePath::new("max_body"),
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

    async fn configure<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        _terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let config_default = ProviderConfig::default();
        let config = config.as_ref().unwrap_or(&config_default);

        let section = config
            .config_section
            .as_deref_option()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SECTION)
            .to_owned();

        let explicit = PartialCredentials {
            host: owned_nonempty(&config.host).map(edgerc::normalize_host),
            client_token: owned_nonempty(&config.client_token),
            client_secret: owned_nonempty(&config.client_secret),
            access_token: owned_nonempty(&config.access_token),
            max_body: config.max_body.as_ref_option().map(|&n| n as usize),
        };

        let credentials =
            match edgerc::resolve(explicit, config.edgerc.as_deref_option(), &section) {
                Ok(credentials) => credentials,
                Err(err) => {
                    diags.root_error(
                        "Failed to resolve EdgeGrid credentials",
                        err.to_string(),
                    );
                    return None;
                }
            };

        match Client::new(credentials) {
            Ok(client) => {
                tracing::debug!(section, "configured Akamai provider");
                *self.client.write().await = Some(client);
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to build the API client", err.to_string());
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::resource::DynamicResource>>>
    {
        Some(map! {
            "cloudwrapper_configuration" => ConfigurationResource::new(self.client.clone()),
            "cloudwrapper_activation"    => ActivationResource::new(self.client.clone()),
            "dns_zone"   => ZoneResource::new(self.client.clone()),
            "dns_record" => RecordResource::new(self.client.clone()),
            "gtm_domain" => DomainResource::new(self.client.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<
        std::collections::HashMap<String, Box<dyn tf_provider::data_source::DynamicDataSource>>,
    > {
        Some(map! {
            "cloudwrapper_configuration"  => ConfigurationDataSource::new(self.client.clone()),
            "cloudwrapper_configurations" => ConfigurationsDataSource::new(self.client.clone()),
            "cloudwrapper_locations"  => LocationsDataSource::new(self.client.clone()),
            "cloudwrapper_capacities" => CapacitiesDataSource::new(self.client.clone()),
            "dns_record"     => RecordDataSource::new(self.client.clone()),
            "gtm_datacenter" => DatacenterDataSource::new(self.client.clone()),
            "papi_contracts" => ContractsDataSource::new(self.client.clone()),
            "papi_groups"    => GroupsDataSource::new(self.client.clone()),
        })
    }
}
