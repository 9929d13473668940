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

//! Google API client helpers.
//!
//! This crate contains the types and functions shared by the generated
//! clients: the error taxonomy, retry and backoff policies, per-call options,
//! the method configuration registry, and the call wrapper that every RPC
//! funnels through.
//!
//! Most applications only interact with this crate through the re-exports in
//! the generated clients. The main exceptions are the retry, backoff, and
//! timeout overrides in [options::RequestOptionsBuilder].

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

pub mod api_header;
pub mod backoff_policy;
pub mod client_builder;
pub mod credentials;
pub mod exponential_backoff;
pub mod method_config;
pub mod options;
pub mod path_template;
pub mod polling_backoff_policy;
pub mod retry_loop_internal;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;
pub mod transport;
pub mod wrapper;
