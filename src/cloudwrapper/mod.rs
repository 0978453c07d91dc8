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

//! CloudWrapper subprovider.

use std::time::Duration;

use tf_provider::value::{ValueNumber, ValueString};

mod activation;
mod configuration;
mod data_source;
mod normalize;
pub mod revision;
mod state;
mod validate;

pub use activation::ActivationResource;
pub use configuration::ConfigurationResource;
pub use data_source::{
    CapacitiesDataSource, ConfigurationDataSource, ConfigurationsDataSource, LocationsDataSource,
};

/// Configuration ids are numeric; Terraform carries them as strings.
fn parse_config_id(id: &ValueString) -> Option<i64> {
    id.as_deref_option()?.trim().parse().ok()
}

/// Poll deadline from the optional per-resource override.
fn wait_deadline(minutes: &ValueNumber, default: Duration) -> Duration {
    match minutes.as_ref_option() {
        Some(&minutes) if minutes > 0 => Duration::from_secs(minutes as u64 * 60),
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use tf_provider::value::Value;

    use super::*;

    #[test]
    fn config_id_parses_digits_only() {
        assert_eq!(parse_config_id(&Value::Value(" 1234 ".into())), Some(1234));
        assert_eq!(parse_config_id(&Value::Value("cfg-12".into())), None);
        assert_eq!(parse_config_id(&Value::Null), None);
        assert_eq!(parse_config_id(&Value::Unknown), None);
    }

    #[test]
    fn wait_deadline_falls_back_to_default() {
        let default = Duration::from_secs(600);
        assert_eq!(wait_deadline(&Value::Value(5), default), Duration::from_secs(300));
        assert_eq!(wait_deadline(&Value::Null, default), default);
        assert_eq!(wait_deadline(&Value::Value(0), default), default);
    }
}
