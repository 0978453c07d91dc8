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
use tf_provider::value::{Value, ValueBool, ValueNumber, ValueString};
use tf_provider::{map, Block, Description, Schema};

use crate::api::gtm::{Datacenter, Domain};
use crate::utils::{string_value, WithSchema};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainState<'a> {
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(rename = "type", borrow)]
    pub domain_type: ValueString<'a>,
    #[serde(borrow)]
    pub comment: ValueString<'a>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
    pub wait_timeout_minutes: ValueNumber,
}

impl<'a> WithSchema for DomainState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Fully qualified GTM domain name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Domain type, e.g. basic, full or weighted"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "comment" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Free-form change notes"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Propagation status of the last change"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "wait_timeout_minutes" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("How long to wait for changes to propagate"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("GTM load-balancing domain"),
                ..Default::default()
            },
        }
    }
}

impl<'a> DomainState<'a> {
    pub fn domain(&self) -> Domain {
        Domain {
            name: self.name.as_str().to_owned(),
            domain_type: self.domain_type.as_str().to_owned(),
            comment: self.comment.as_str().to_owned(),
        }
    }

    pub fn apply_remote(&mut self, remote: &Domain) {
        self.name = string_value(&remote.name);
        self.domain_type = string_value(&remote.domain_type);
        self.comment = string_value(&remote.comment);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatacenterDataState<'a> {
    #[serde(borrow)]
    pub domain: ValueString<'a>,
    pub datacenter_id: ValueNumber,
    #[serde(borrow)]
    pub nickname: ValueString<'a>,
    #[serde(borrow)]
    pub city: ValueString<'a>,
    #[serde(borrow)]
    pub continent: ValueString<'a>,
    pub virtual_datacenter: ValueBool,
}

impl<'a> WithSchema for DatacenterDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "domain" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("GTM domain the datacenter belongs to"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "datacenter_id" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Numeric datacenter id"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "nickname" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Human readable datacenter name"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "city" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("City the datacenter is located in"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "continent" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Continent code of the datacenter"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "virtual_datacenter" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Whether the datacenter is virtual"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("Look up one GTM datacenter"),
                ..Default::default()
            },
        }
    }
}

impl<'a> DatacenterDataState<'a> {
    pub fn apply_remote(&mut self, remote: &Datacenter) {
        self.nickname = string_value(&remote.nickname);
        self.city = string_value(&remote.city);
        self.continent = string_value(&remote.continent);
        self.virtual_datacenter = Value::Value(remote.virtual_datacenter);
    }
}
