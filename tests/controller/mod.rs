//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with an in-memory database and session.

mod directory;
mod formation;
mod identity;
mod roster;

use gunshi_test_utils::prelude::*;

use crate::util::{read_json, TestSetupExt};
