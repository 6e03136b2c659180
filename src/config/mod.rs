// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module handles loading and parsing configuration from files and
//! built-in defaults.

mod loader;
mod schema;

pub use loader::{find_config_file, load_config, parse_config};
pub use schema::*;
