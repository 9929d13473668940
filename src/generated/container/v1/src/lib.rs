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

//! Google Cloud Client Libraries for Rust - Kubernetes Engine API
//!
//! This crate contains traits, types, and functions to interact with the
//! Kubernetes Engine API. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [ClusterManager](client/struct.ClusterManager.html)
//!
//! Mutating RPCs return an [Operation][model::Operation]. Use the
//! [lro] module to wait until the operation completes.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.

pub use gax::Result;
pub use gax::error::Error;

pub use gax::backoff_policy;
pub use gax::credentials;
pub use gax::exponential_backoff;
pub use gax::options;
pub use gax::polling_backoff_policy;
pub use gax::retry_policy;

pub mod model;
pub mod resource;

/// Concrete implementations of this client library traits.
pub mod client;

pub mod builder;
pub mod lro;
pub mod stub;

pub(crate) mod tracing;
pub(crate) mod transport;
