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

use super::state::{ActivationState, ConfigurationState};

const CAPACITY_UNITS: &[&str] = &["GB", "TB"];

#[async_trait]
impl<'a> WithValidate for ConfigurationState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(name) = &self.config_name {
            if name.is_empty() {
                diags.error_short(
                    "`config_name` must not be empty",
                    attr_path.clone().attribute("config_name"),
                );
            }
        }

        if let Value::Value(property_ids) = &self.property_ids {
            if property_ids.is_empty() {
                diags.error_short(
                    "At least one property id is required",
                    attr_path.clone().attribute("property_ids"),
                );
            }
        }

        for (i, email) in self.notification_emails.iter().flatten().enumerate() {
            if let Value::Value(email) = email {
                if !email.contains('@') {
                    diags.error(
                        "Invalid notification email",
                        format!("`{email}` does not look like an email address"),
                        attr_path
                            .clone()
                            .attribute("notification_emails")
                            .index(i as i64),
                    );
                }
            }
        }

        if let Value::Value(threshold) = &self.capacity_alerts_threshold {
            if !(1..=100).contains(threshold) {
                diags.error_short(
                    "`capacity_alerts_threshold` must be a percentage between 1 and 100",
                    attr_path.clone().attribute("capacity_alerts_threshold"),
                );
            }
        }

        if let Value::Value(minutes) = &self.wait_timeout_minutes {
            if *minutes <= 0 {
                diags.error_short(
                    "`wait_timeout_minutes` must be positive",
                    attr_path.clone().attribute("wait_timeout_minutes"),
                );
            }
        }

        if self.location == Value::Value(Vec::new()) {
            diags.error_short(
                "At least one `location` block is required",
                attr_path.clone().attribute("location"),
            );
        }

        for (i, location) in self.location.iter().flatten().enumerate() {
            let Value::Value(location) = location else {
                continue;
            };
            let location_path = attr_path.clone().attribute("location").index(i as i64);

            if let Value::Value(traffic_type_id) = &location.traffic_type_id {
                if *traffic_type_id <= 0 {
                    diags.error_short(
                        "`traffic_type_id` must be positive",
                        location_path.clone().attribute("traffic_type_id"),
                    );
                }
            }

            if let Value::Value(capacity) = &location.capacity {
                if let Value::Value(value) = &capacity.value {
                    if *value <= 0 {
                        diags.error_short(
                            "Capacity `value` must be positive",
                            location_path.clone().attribute("capacity").attribute("value"),
                        );
                    }
                }
                if let Value::Value(unit) = &capacity.unit {
                    if !CAPACITY_UNITS.contains(&unit.as_ref()) {
                        diags.error(
                            "Invalid capacity unit",
                            format!("`{unit}` is not one of GB, TB"),
                            location_path.clone().attribute("capacity").attribute("unit"),
                        );
                    }
                }
            }
        }
    }
}

#[async_trait]
impl<'a> WithValidate for ActivationState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(config_id) = &self.config_id {
            if *config_id <= 0 {
                diags.error_short(
                    "`config_id` must be positive",
                    attr_path.clone().attribute("config_id"),
                );
            }
        }

        if let Value::Value(revision) = &self.revision {
            if revision.is_empty() {
                diags.error_short(
                    "`revision` must not be empty",
                    attr_path.clone().attribute("revision"),
                );
            }
        }

        if let Value::Value(minutes) = &self.wait_timeout_minutes {
            if *minutes <= 0 {
                diags.error_short(
                    "`wait_timeout_minutes` must be positive",
                    attr_path.attribute("wait_timeout_minutes"),
                );
            }
        }
    }
}
