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

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType};
use tf_provider::value::{Value, ValueBool, ValueList, ValueNumber, ValueString};
use tf_provider::{map, Block, Description, Schema};

use crate::api::dns::{RecordSet, Zone, ZoneRequest};
use crate::utils::{string_list, string_value, WithSchema};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneState<'a> {
    #[serde(borrow)]
    pub zone: ValueString<'a>,
    #[serde(rename = "type", borrow)]
    pub zone_type: ValueString<'a>,
    #[serde(borrow)]
    pub masters: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub comment: ValueString<'a>,
    pub sign_and_serve: ValueBool,
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(borrow)]
    pub group: ValueString<'a>,
    #[serde(borrow)]
    pub activation_state: ValueString<'a>,
    #[serde(borrow)]
    pub version_id: ValueString<'a>,
}

impl<'a> WithSchema for ZoneState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fully qualified zone name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Zone type, PRIMARY, SECONDARY or ALIAS"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "masters" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Master name servers, for SECONDARY zones"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Free-form zone notes"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "sign_and_serve" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Serve the zone DNSSEC-signed"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "contract_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Contract the zone is created under"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "group" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Group the zone is created under"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "activation_state" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Activation state reported by the service"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "version_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Version of the zone configuration"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("Edge DNS zone"),
                ..Default::default()
            },
        }
    }
}

impl<'a> ZoneState<'a> {
    pub fn request(&self) -> ZoneRequest {
        ZoneRequest {
            zone: self.zone.as_str().to_owned(),
            zone_type: self.zone_type.as_str().to_owned(),
            masters: self
                .masters
                .iter()
                .flatten()
                .filter_map(|v| v.as_deref_option())
                .map(str::to_owned)
                .collect(),
            comment: self.comment.as_str().to_owned(),
            sign_and_serve: self.sign_and_serve.unwrap_or(false),
        }
    }

    pub fn apply_remote(&mut self, remote: &Zone) {
        self.zone = string_value(&remote.zone);
        self.zone_type = string_value(&remote.zone_type);
        self.masters = string_list(&remote.masters);
        self.comment = string_value(&remote.comment);
        self.sign_and_serve = Value::Value(remote.sign_and_serve);
        self.activation_state = string_value(&remote.activation_state);
        self.version_id = string_value(&remote.version_id);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordState<'a> {
    #[serde(borrow)]
    pub zone: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub record_type: ValueString<'a>,
    pub ttl: ValueNumber,
    #[serde(borrow)]
    pub rdata: ValueList<ValueString<'a>>,
}

impl<'a> WithSchema for RecordState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Zone the record set lives in"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fully qualified record set name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "record_type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Record type, e.g. A, AAAA, CNAME or TXT"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "ttl" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Time to live, in seconds"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "rdata" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Record data, one entry per record"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                },
                description: Description::plain("Edge DNS record set"),
                ..Default::default()
            },
        }
    }
}

impl<'a> RecordState<'a> {
    pub fn record_set(&self) -> RecordSet {
        RecordSet {
            name: self.name.as_str().to_owned(),
            record_type: self.record_type.as_str().to_owned(),
            ttl: self.ttl.unwrap_or(0),
            rdata: self
                .rdata
                .iter()
                .flatten()
                .filter_map(|v| v.as_deref_option())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn apply_remote(&mut self, remote: &RecordSet) {
        self.name = string_value(&remote.name);
        self.record_type = string_value(&remote.record_type);
        self.ttl = Value::Value(remote.ttl);
        self.rdata = string_list(&remote.rdata);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDataState<'a> {
    #[serde(borrow)]
    pub zone: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub record_type: ValueString<'a>,
    pub ttl: ValueNumber,
    #[serde(borrow)]
    pub rdata: ValueList<ValueString<'a>>,
}

impl<'a> WithSchema for RecordDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "zone" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Zone the record set lives in"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fully qualified record set name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "record_type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Record type to look up"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "ttl" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Time to live, in seconds"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "rdata" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Record data, one entry per record"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("Look up one Edge DNS record set"),
                ..Default::default()
            },
        }
    }
}
