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

use tf_provider::value::Value;
use tf_provider::{AttributePath, Diagnostics};

use crate::utils::WithValidate;

use super::state::{RecordState, ZoneState};

const ZONE_TYPES: &[&str] = &["PRIMARY", "SECONDARY", "ALIAS"];

#[async_trait]
impl<'a> WithValidate for ZoneState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(zone) = &self.zone {
            if zone.is_empty() {
                diags.error_short("`zone` must not be empty", attr_path.clone().attribute("zone"));
            }
        }

        if let Value::Value(zone_type) = &self.zone_type {
            let upper = zone_type.to_ascii_uppercase();
            if !ZONE_TYPES.contains(&upper.as_str()) {
                diags.error(
                    "Invalid zone type",
                    format!("`{zone_type}` is not one of PRIMARY, SECONDARY, ALIAS"),
                    attr_path.clone().attribute("type"),
                );
            }

            // Master servers only make sense when the zone is
            // transferred in.
            if let Value::Value(masters) = &self.masters {
                if upper == "SECONDARY" && masters.is_empty() {
                    diags.error_short(
                        "SECONDARY zones need at least one master server",
                        attr_path.clone().attribute("masters"),
                    );
                }
                if upper != "SECONDARY" && !masters.is_empty() {
                    diags.error_short(
                        "`masters` is only valid for SECONDARY zones",
                        attr_path.clone().attribute("masters"),
                    );
                }
            }
        }

        if let Value::Value(contract_id) = &self.contract_id {
            if contract_id.is_empty() {
                diags.error_short(
                    "`contract_id` must not be empty",
                    attr_path.attribute("contract_id"),
                );
            }
        }
    }
}

#[async_trait]
impl<'a> WithValidate for RecordState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(name) = &self.name {
            if name.is_empty() {
                diags.error_short("`name` must not be empty", attr_path.clone().attribute("name"));
            }
        }

        if let Value::Value(record_type) = &self.record_type {
            if record_type.is_empty() || !record_type.chars().all(|c| c.is_ascii_uppercase()) {
                diags.error(
                    "Invalid record type",
                    format!("`{record_type}` should be an upper-case type mnemonic such as A, CNAME or TXT"),
                    attr_path.clone().attribute("record_type"),
                );
            }
        }

        if let Value::Value(ttl) = &self.ttl {
            if *ttl <= 0 {
                diags.error_short("`ttl` must be positive", attr_path.clone().attribute("ttl"));
            }
        }

        if let Value::Value(rdata) = &self.rdata {
            if rdata.is_empty() {
                diags.error_short(
                    "`rdata` must contain at least one record",
                    attr_path.attribute("rdata"),
                );
            }
        }
    }
}
