// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Expand resource name templates.
//!
//! Resource names follow templates such as
//! `projects/{project}/locations/{location}/clusters/{cluster}`. A
//! placeholder may carry a pattern (`{name=projects/*}`), the pattern is
//! informational and not enforced here.

use crate::Result;
use crate::error::Error;

/// Replaces each `{placeholder}` in `template` with its binding.
///
/// A placeholder without a binding, or bound to an empty value, fails with an
/// invalid argument error. Bindings not used by the template are ignored.
///
/// # Example
/// ```
/// # use container_gax::path_template::expand;
/// let name = expand(
///     "projects/{project}/locations/{location}",
///     &[("project", "my-project"), ("location", "us-central1")],
/// )?;
/// assert_eq!(name, "projects/my-project/locations/us-central1");
/// # Ok::<(), container_gax::error::Error>(())
/// ```
pub fn expand(template: &str, bindings: &[(&str, &str)]) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            Error::invalid_argument(format!("unterminated placeholder in template {template}"))
        })?;
        let placeholder = &after[..close];
        let key = placeholder
            .split_once('=')
            .map(|(k, _)| k)
            .unwrap_or(placeholder)
            .trim();
        let value = bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "missing value for {{{key}}} in template {template}"
                ))
            })?;
        output.push_str(value);
        rest = &after[close + 1..];
    }
    output.push_str(rest);
    Ok(output)
}
