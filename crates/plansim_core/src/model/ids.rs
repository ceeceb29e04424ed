//! Identifiers for records owned by the surrounding application
//!
//! The engine never looks these up; it only copies them into the
//! `SimulationRecord` it hands back for persistence.

use serde::{Deserialize, Serialize};

/// Identifier of a stored investment plan
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PlanId(pub u64);

/// Identifier of the user owning a plan
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub u64);
