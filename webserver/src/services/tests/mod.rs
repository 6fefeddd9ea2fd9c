//! Service tests for webserver
//!
//! This module contains tests for the catalog store implementations.

pub mod fixtures;
pub mod helpers;
