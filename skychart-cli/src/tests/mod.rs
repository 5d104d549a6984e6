//! Shared test harness modules for the skychart CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::convert::{
    ConvertConfig, DEFAULT_CATALOG, DEFAULT_OUTPUT, RepairMode, config_from_layers_for_test,
    execute_convert, run_convert_with,
};
