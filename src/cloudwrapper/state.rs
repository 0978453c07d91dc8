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

use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, NestedBlock};
use tf_provider::value::{self, Value, ValueBool, ValueList, ValueNumber, ValueString};
use tf_provider::{map, Block, Description, Schema};

use crate::api::cloudwrapper::{
    Capacity, ConfigLocation, Configuration, ConfigurationRequest, Location, LocationCapacity,
};
use crate::cloudwrapper::revision::configuration_revision;
use crate::utils::{string_list, string_value, WithSchema};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityState<'a> {
    pub value: ValueNumber,
    #[serde(borrow)]
    pub unit: ValueString<'a>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationState<'a> {
    pub traffic_type_id: ValueNumber,
    #[serde(borrow)]
    pub comments: ValueString<'a>,
    #[serde(with = "value::serde_as_vec")]
    pub capacity: Value<CapacityState<'a>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub config_name: ValueString<'a>,
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(borrow)]
    pub property_ids: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub comments: ValueString<'a>,
    #[serde(borrow)]
    pub notification_emails: ValueList<ValueString<'a>>,
    pub retain_idle_objects: ValueBool,
    pub capacity_alerts_threshold: ValueNumber,
    #[serde(borrow)]
    pub location: ValueList<Value<LocationState<'a>>>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
    #[serde(borrow)]
    pub revision: ValueString<'a>,
    pub wait_timeout_minutes: ValueNumber,
}

impl<'a> WithSchema for ConfigurationState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Configuration id assigned by the service"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "config_name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Name of the configuration"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "contract_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Contract the capacity is drawn from"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "property_ids" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Delivery properties covered by the configuration"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "comments" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Free-form change notes"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "notification_emails" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Addresses notified about capacity alerts"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "retain_idle_objects" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Keep cached objects for properties no longer in the configuration"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "capacity_alerts_threshold" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Utilisation percentage above which alerts are sent"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Remote status of the configuration"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "revision" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fingerprint of the applied configuration fields"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "wait_timeout_minutes" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("How long to wait for the service when deleting"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                blocks: map! {
                    "location" => NestedBlock::List(location_block()),
                },
                description: Description::plain("CloudWrapper caching configuration"),
                ..Default::default()
            },
        }
    }
}

fn location_block() -> Block {
    Block {
        attributes: map! {
            "traffic_type_id" => Attribute {
                attr_type: AttributeType::Number,
                description: Description::plain("Traffic type served from this location"),
                constraint: AttributeConstraint::Required,
                ..Default::default()
            },
            "comments" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Free-form notes for this location"),
                constraint: AttributeConstraint::Optional,
                ..Default::default()
            },
        },
        blocks: map! {
            "capacity" => NestedBlock::Single(Block {
                attributes: map! {
                    "value" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Amount of capacity to allocate"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "unit" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Unit of the capacity value, GB or TB"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                },
                description: Description::plain("Capacity allocated to this location"),
                ..Default::default()
            }),
        },
        description: Description::plain("Capacity allocation for one traffic location"),
        ..Default::default()
    }
}

impl<'a> ConfigurationState<'a> {
    /// Request body for the configuration as declared, or `None` while
    /// any contributing field is still unknown.
    pub fn request(&self) -> Option<ConfigurationRequest> {
        if self.config_name.is_unknown()
            || self.contract_id.is_unknown()
            || self.comments.is_unknown()
            || self.retain_idle_objects.is_unknown()
            || self.capacity_alerts_threshold.is_unknown()
            || list_unknown(&self.property_ids)
            || list_unknown(&self.notification_emails)
            || self.locations_unknown()
        {
            return None;
        }

        Some(ConfigurationRequest {
            config_name: self.config_name.as_str().to_owned(),
            contract_id: self.contract_id.as_str().to_owned(),
            property_ids: known_strings(&self.property_ids),
            comments: self.comments.as_str().to_owned(),
            notification_emails: known_strings(&self.notification_emails),
            retain_idle_objects: self.retain_idle_objects.unwrap_or(false),
            capacity_alerts_threshold: self.capacity_alerts_threshold.as_ref_option().copied(),
            locations: self
                .location
                .iter()
                .flatten()
                .filter_map(|location| {
                    let location = location.as_ref_option()?;
                    let capacity = location.capacity.as_ref_option()?;
                    Some(ConfigLocation {
                        traffic_type_id: location.traffic_type_id.unwrap_or(0),
                        comments: location.comments.as_str().to_owned(),
                        capacity: Capacity {
                            value: capacity.value.unwrap_or(0),
                            unit: capacity.unit.as_str().to_owned(),
                        },
                    })
                })
                .collect(),
        })
    }

    /// Revision of the configuration as declared, unknown while any
    /// hashed field is.
    pub fn planned_revision(&self) -> ValueString<'static> {
        match self.request() {
            Some(request) => Value::Value(configuration_revision(&request).into()),
            None => Value::Unknown,
        }
    }

    /// Overwrite state with what the service reports, re-deriving the
    /// revision so drift in any hashed field is visible.
    pub fn apply_remote(&mut self, remote: &Configuration) {
        self.id = string_value(&remote.config_id.to_string());
        self.config_name = string_value(&remote.config_name);
        self.contract_id = string_value(&remote.contract_id);
        self.property_ids = string_list(&remote.property_ids);
        self.comments = string_value(&remote.comments);
        self.notification_emails = string_list(&remote.notification_emails);
        self.retain_idle_objects = Value::Value(remote.retain_idle_objects);
        self.capacity_alerts_threshold = match remote.capacity_alerts_threshold {
            Some(threshold) => Value::Value(threshold),
            None => Value::Null,
        };
        self.location = Value::Value(
            remote
                .locations
                .iter()
                .map(|location| {
                    Value::Value(LocationState {
                        traffic_type_id: Value::Value(location.traffic_type_id),
                        comments: string_value(&location.comments),
                        capacity: Value::Value(CapacityState {
                            value: Value::Value(location.capacity.value),
                            unit: string_value(&location.capacity.unit),
                        }),
                    })
                })
                .collect(),
        );
        self.status = string_value(remote.status.as_str());
        self.revision = string_value(&configuration_revision(
            &ConfigurationRequest::from_remote(remote),
        ));
    }

    fn locations_unknown(&self) -> bool {
        if self.location.is_unknown() {
            return true;
        }
        self.location.iter().flatten().any(|location| {
            location.is_unknown()
                || location.as_ref_option().is_some_and(|location| {
                    location.traffic_type_id.is_unknown()
                        || location.comments.is_unknown()
                        || location.capacity.is_unknown()
                        || location.capacity.as_ref_option().is_some_and(|capacity| {
                            capacity.value.is_unknown() || capacity.unit.is_unknown()
                        })
                })
        })
    }
}

fn list_unknown(list: &ValueList<ValueString<'_>>) -> bool {
    list.is_unknown() || list.iter().flatten().any(Value::is_unknown)
}

fn known_strings(list: &ValueList<ValueString<'_>>) -> Vec<String> {
    list.iter()
        .flatten()
        .filter_map(|v| v.as_deref_option())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationState<'a> {
    pub config_id: ValueNumber,
    #[serde(borrow)]
    pub revision: ValueString<'a>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
    pub wait_timeout_minutes: ValueNumber,
}

impl<'a> WithSchema for ActivationState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "config_id" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Configuration to activate"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "revision" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Configuration revision this activation tracks; changing it re-activates"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Remote status of the configuration"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "wait_timeout_minutes" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("How long to wait for the activation to complete"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("Activation of a CloudWrapper configuration"),
                ..Default::default()
            },
        }
    }
}

// Data source states. Nested values surface as object attributes, not
// configuration blocks, since everything below the lookup key is
// computed.

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityObject<'a> {
    pub value: ValueNumber,
    #[serde(borrow)]
    pub unit: ValueString<'a>,
}

impl<'a> CapacityObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "value" => AttributeType::Number,
            "unit" => AttributeType::String,
        })
    }

    fn from_api(capacity: &Capacity) -> Self {
        Self {
            value: Value::Value(capacity.value),
            unit: string_value(&capacity.unit),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationObject<'a> {
    pub traffic_type_id: ValueNumber,
    #[serde(borrow)]
    pub comments: ValueString<'a>,
    pub capacity: Value<CapacityObject<'a>>,
}

impl<'a> LocationObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "traffic_type_id" => AttributeType::Number,
            "comments" => AttributeType::String,
            "capacity" => CapacityObject::attr_type(),
        })
    }

    fn from_api(location: &ConfigLocation) -> Self {
        Self {
            traffic_type_id: Value::Value(location.traffic_type_id),
            comments: string_value(&location.comments),
            capacity: Value::Value(CapacityObject::from_api(&location.capacity)),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDataState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub config_name: ValueString<'a>,
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(borrow)]
    pub property_ids: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub comments: ValueString<'a>,
    #[serde(borrow)]
    pub notification_emails: ValueList<ValueString<'a>>,
    pub retain_idle_objects: ValueBool,
    pub capacity_alerts_threshold: ValueNumber,
    #[serde(borrow)]
    pub locations: ValueList<Value<LocationObject<'a>>>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
}

impl<'a> WithSchema for ConfigurationDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Configuration id to look up"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "config_name" => computed(AttributeType::String, "Name of the configuration"),
                    "contract_id" => computed(AttributeType::String, "Contract the capacity is drawn from"),
                    "property_ids" => computed(
                        AttributeType::List(AttributeType::String.into()),
                        "Delivery properties covered by the configuration",
                    ),
                    "comments" => computed(AttributeType::String, "Free-form change notes"),
                    "notification_emails" => computed(
                        AttributeType::List(AttributeType::String.into()),
                        "Addresses notified about capacity alerts",
                    ),
                    "retain_idle_objects" => computed(AttributeType::Bool, "Whether idle objects are retained"),
                    "capacity_alerts_threshold" => computed(AttributeType::Number, "Alerting threshold"),
                    "locations" => computed(
                        AttributeType::List(LocationObject::attr_type().into()),
                        "Capacity allocations per location",
                    ),
                    "status" => computed(AttributeType::String, "Remote status of the configuration"),
                },
                description: Description::plain("Look up one CloudWrapper configuration"),
                ..Default::default()
            },
        }
    }
}

impl<'a> ConfigurationDataState<'a> {
    pub fn apply_remote(&mut self, remote: &Configuration) {
        self.config_name = string_value(&remote.config_name);
        self.contract_id = string_value(&remote.contract_id);
        self.property_ids = string_list(&remote.property_ids);
        self.comments = string_value(&remote.comments);
        self.notification_emails = string_list(&remote.notification_emails);
        self.retain_idle_objects = Value::Value(remote.retain_idle_objects);
        self.capacity_alerts_threshold = match remote.capacity_alerts_threshold {
            Some(threshold) => Value::Value(threshold),
            None => Value::Null,
        };
        self.locations = Value::Value(
            remote
                .locations
                .iter()
                .map(|location| Value::Value(LocationObject::from_api(location)))
                .collect(),
        );
        self.status = string_value(remote.status.as_str());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationObject<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub config_name: ValueString<'a>,
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(borrow)]
    pub property_ids: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
}

impl<'a> ConfigurationObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "id" => AttributeType::String,
            "config_name" => AttributeType::String,
            "contract_id" => AttributeType::String,
            "property_ids" => AttributeType::List(AttributeType::String.into()),
            "status" => AttributeType::String,
        })
    }

    pub fn from_api(configuration: &Configuration) -> Self {
        Self {
            id: string_value(&configuration.config_id.to_string()),
            config_name: string_value(&configuration.config_name),
            contract_id: string_value(&configuration.contract_id),
            property_ids: string_list(&configuration.property_ids),
            status: string_value(configuration.status.as_str()),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationsDataState<'a> {
    #[serde(borrow)]
    pub configurations: ValueList<Value<ConfigurationObject<'a>>>,
}

impl<'a> WithSchema for ConfigurationsDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "configurations" => computed(
                        AttributeType::List(ConfigurationObject::attr_type().into()),
                        "Every CloudWrapper configuration visible to the credentials",
                    ),
                },
                description: Description::plain("List CloudWrapper configurations"),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficTypeObject<'a> {
    pub traffic_type_id: ValueNumber,
    #[serde(borrow)]
    pub traffic_type: ValueString<'a>,
    #[serde(borrow)]
    pub map_name: ValueString<'a>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationListObject<'a> {
    pub location_id: ValueNumber,
    #[serde(borrow)]
    pub location_name: ValueString<'a>,
    #[serde(borrow)]
    pub multi_cdn_location_id: ValueString<'a>,
    #[serde(borrow)]
    pub traffic_types: ValueList<Value<TrafficTypeObject<'a>>>,
}

impl<'a> LocationListObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "location_id" => AttributeType::Number,
            "location_name" => AttributeType::String,
            "multi_cdn_location_id" => AttributeType::String,
            "traffic_types" => AttributeType::List(
                AttributeType::Object(map! {
                    "traffic_type_id" => AttributeType::Number,
                    "traffic_type" => AttributeType::String,
                    "map_name" => AttributeType::String,
                })
                .into(),
            ),
        })
    }

    pub fn from_api(location: &Location) -> Self {
        Self {
            location_id: Value::Value(location.location_id),
            location_name: string_value(&location.location_name),
            multi_cdn_location_id: string_value(&location.multi_cdn_location_id),
            traffic_types: Value::Value(
                location
                    .traffic_types
                    .iter()
                    .map(|tt| {
                        Value::Value(TrafficTypeObject {
                            traffic_type_id: Value::Value(tt.traffic_type_id),
                            traffic_type: string_value(&tt.traffic_type),
                            map_name: string_value(&tt.map_name),
                        })
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsDataState<'a> {
    #[serde(borrow)]
    pub locations: ValueList<Value<LocationListObject<'a>>>,
}

impl<'a> WithSchema for LocationsDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "locations" => computed(
                        AttributeType::List(LocationListObject::attr_type().into()),
                        "Locations CloudWrapper can allocate capacity in",
                    ),
                },
                description: Description::plain("List CloudWrapper locations"),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityEntryObject<'a> {
    pub location_id: ValueNumber,
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(rename = "type", borrow)]
    pub capacity_type: ValueString<'a>,
    pub approved: Value<CapacityObject<'a>>,
    pub assigned: Value<CapacityObject<'a>>,
    pub unassigned: Value<CapacityObject<'a>>,
}

impl<'a> CapacityEntryObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "location_id" => AttributeType::Number,
            "contract_id" => AttributeType::String,
            "type" => AttributeType::String,
            "approved" => CapacityObject::attr_type(),
            "assigned" => CapacityObject::attr_type(),
            "unassigned" => CapacityObject::attr_type(),
        })
    }

    pub fn from_api(capacity: &LocationCapacity) -> Self {
        Self {
            location_id: Value::Value(capacity.location_id),
            contract_id: string_value(&capacity.contract_id),
            capacity_type: string_value(&capacity.capacity_type),
            approved: Value::Value(CapacityObject::from_api(&capacity.approved)),
            assigned: Value::Value(CapacityObject::from_api(&capacity.assigned)),
            unassigned: Value::Value(CapacityObject::from_api(&capacity.unassigned)),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitiesDataState<'a> {
    #[serde(borrow)]
    pub contract_ids: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub capacities: ValueList<Value<CapacityEntryObject<'a>>>,
}

impl<'a> WithSchema for CapacitiesDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "contract_ids" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Contracts to report capacity for"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "capacities" => computed(
                        AttributeType::List(CapacityEntryObject::attr_type().into()),
                        "Approved, assigned and unassigned capacity per location",
                    ),
                },
                description: Description::plain("Report CloudWrapper capacity usage"),
                ..Default::default()
            },
        }
    }
}

fn computed(attr_type: AttributeType, description: &str) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}
