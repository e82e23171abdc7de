use serde::{Deserialize, Serialize};
use std::fmt;

/// A stopping point on the rally route ("camping").
///
/// `distance_to_next` is the leg, in kilometres, from this waypoint to the next
/// one. For the last waypoint it is the leg to the finishing line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Waypoint {
    id: String,
    distance_to_next: u32,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, distance_to_next: u32) -> Self {
        Self {
            id: id.into(),
            distance_to_next,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn distance_to_next(&self) -> u32 {
        self.distance_to_next
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
