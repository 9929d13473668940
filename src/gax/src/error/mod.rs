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

mod core_error;
pub use core_error::*;

/// Status codes and error payloads returned by the service.
///
/// The client libraries distinguish between errors detected while trying to
/// send a RPC (e.g. cannot open a connection), errors detected by the client
/// (e.g. the attempt timed out), and errors returned by the service itself.
/// The types in this module represent the last kind.
pub mod rpc;
