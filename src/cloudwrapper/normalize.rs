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

use tf_provider::value::Value;
use tf_provider::Diagnostics;

use crate::utils::WithNormalize;

use super::state::ConfigurationState;

// The service reports omitted strings as empty and omitted lists as
// empty; state has to agree with it so refresh stays a no-op.
impl<'a> WithNormalize for ConfigurationState<'a> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.id.is_null() {
            self.id = Value::Unknown;
        }
        if self.comments.is_null() {
            self.comments = Value::Value("".into());
        }
        if self.notification_emails.is_null() {
            self.notification_emails = Value::Value(Vec::new());
        }
        if self.retain_idle_objects.is_null() {
            self.retain_idle_objects = Value::Value(false);
        }
        if let Value::Value(locations) = &mut self.location {
            for location in locations.iter_mut() {
                if let Value::Value(location) = location {
                    if location.comments.is_null() {
                        location.comments = Value::Value("".into());
                    }
                }
            }
        }
    }
}
