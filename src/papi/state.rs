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
use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::{map, Block, Description, Schema};

use crate::api::papi::{Contract, Group};
use crate::utils::{string_list, string_value, WithSchema};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractObject<'a> {
    #[serde(borrow)]
    pub contract_id: ValueString<'a>,
    #[serde(borrow)]
    pub contract_type_name: ValueString<'a>,
}

impl<'a> ContractObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "contract_id" => AttributeType::String,
            "contract_type_name" => AttributeType::String,
        })
    }

    pub fn from_api(contract: &Contract) -> Self {
        Self {
            contract_id: string_value(&contract.contract_id),
            contract_type_name: string_value(&contract.contract_type_name),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractsDataState<'a> {
    #[serde(borrow)]
    pub contracts: ValueList<Value<ContractObject<'a>>>,
}

impl<'a> WithSchema for ContractsDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "contracts" => Attribute {
                        attr_type: AttributeType::List(ContractObject::attr_type().into()),
                        description: Description::plain("Contracts visible to the credentials"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("List Property Manager contracts"),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupObject<'a> {
    #[serde(borrow)]
    pub group_id: ValueString<'a>,
    #[serde(borrow)]
    pub group_name: ValueString<'a>,
    #[serde(borrow)]
    pub parent_group_id: ValueString<'a>,
    #[serde(borrow)]
    pub contract_ids: ValueList<ValueString<'a>>,
}

impl<'a> GroupObject<'a> {
    fn attr_type() -> AttributeType {
        AttributeType::Object(map! {
            "group_id" => AttributeType::String,
            "group_name" => AttributeType::String,
            "parent_group_id" => AttributeType::String,
            "contract_ids" => AttributeType::List(AttributeType::String.into()),
        })
    }

    pub fn from_api(group: &Group) -> Self {
        Self {
            group_id: string_value(&group.group_id),
            group_name: string_value(&group.group_name),
            parent_group_id: match &group.parent_group_id {
                Some(parent) => string_value(parent),
                None => Value::Null,
            },
            contract_ids: string_list(&group.contract_ids),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupsDataState<'a> {
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub groups: ValueList<Value<GroupObject<'a>>>,
}

impl<'a> WithSchema for GroupsDataState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Only return groups with this exact name"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "groups" => Attribute {
                        attr_type: AttributeType::List(GroupObject::attr_type().into()),
                        description: Description::plain("Groups visible to the credentials"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain("List Property Manager groups"),
                ..Default::default()
            },
        }
    }
}
