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

//! Configuration revision fingerprint.
//!
//! A short digest over the fields that matter for a CloudWrapper
//! configuration update. Two configurations with the same revision are
//! interchangeable as far as the service is concerned, which lets the
//! resource skip redundant update calls.

use crypto::{digest::Digest, sha2::Sha256};

use crate::api::cloudwrapper::ConfigurationRequest;
use crate::utils::DisplayJoinable;

pub const REVISION_LEN: usize = 20;

/// Hash the update-relevant fields of a configuration request.
///
/// Property IDs and locations are sorted first so the fingerprint does
/// not depend on declaration order.
pub fn configuration_revision(config: &ConfigurationRequest) -> String {
    let mut buf = String::new();

    buf.push_str(&config.comments);
    buf.push('\n');

    let mut property_ids: Vec<&str> = config.property_ids.iter().map(String::as_str).collect();
    property_ids.sort_unstable();
    buf.push_str(&property_ids.iter().join_with(",").to_string());
    buf.push('\n');

    buf.push_str(if config.retain_idle_objects {
        "retain"
    } else {
        "release"
    });
    buf.push('\n');

    let mut locations = config.locations.clone();
    locations.sort_by(|a, b| a.traffic_type_id.cmp(&b.traffic_type_id));
    for location in &locations {
        buf.push_str(&format!(
            "{}|{}|{}|{}\n",
            location.traffic_type_id,
            location.comments,
            location.capacity.value,
            location.capacity.unit,
        ));
    }

    let mut digest = Sha256::new();
    digest.input_str(&buf);
    let mut hex = digest.result_str();
    hex.truncate(REVISION_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use crate::api::cloudwrapper::{Capacity, ConfigLocation};

    use super::*;

    fn request() -> ConfigurationRequest {
        ConfigurationRequest {
            config_name: "wrapper-prod".into(),
            contract_id: "ctr_1-2AB34C".into(),
            property_ids: vec!["prp_1001".into(), "prp_42".into()],
            comments: "initial rollout".into(),
            notification_emails: vec!["noc@example.com".into()],
            retain_idle_objects: false,
            capacity_alerts_threshold: Some(75),
            locations: vec![
                location(1, "us-east", 2, "TB"),
                location(7, "eu-west", 500, "GB"),
            ],
        }
    }

    fn location(traffic_type_id: i64, comments: &str, value: i64, unit: &str) -> ConfigLocation {
        ConfigLocation {
            traffic_type_id,
            comments: comments.into(),
            capacity: Capacity {
                value,
                unit: unit.into(),
            },
        }
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(
            configuration_revision(&request()),
            configuration_revision(&request())
        );
    }

    #[test]
    fn twenty_lowercase_hex_chars() {
        let revision = configuration_revision(&request());
        assert_eq!(revision.len(), REVISION_LEN);
        assert!(revision
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn insensitive_to_declaration_order() {
        let mut shuffled = request();
        shuffled.property_ids.reverse();
        shuffled.locations.reverse();
        assert_eq!(
            configuration_revision(&request()),
            configuration_revision(&shuffled)
        );
    }

    #[test]
    fn sensitive_to_every_hashed_field() {
        let base = configuration_revision(&request());

        let mut changed = request();
        changed.comments = "second rollout".into();
        assert_ne!(base, configuration_revision(&changed));

        let mut changed = request();
        changed.retain_idle_objects = true;
        assert_ne!(base, configuration_revision(&changed));

        let mut changed = request();
        changed.property_ids.push("prp_9".into());
        assert_ne!(base, configuration_revision(&changed));

        let mut changed = request();
        changed.locations[0].capacity.value += 1;
        assert_ne!(base, configuration_revision(&changed));
    }

    #[test]
    fn insensitive_to_unhashed_fields() {
        let base = configuration_revision(&request());

        let mut changed = request();
        changed.notification_emails.push("oncall@example.com".into());
        changed.capacity_alerts_threshold = None;
        assert_eq!(base, configuration_revision(&changed));
    }
}
