use crate::model::StopId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an unordered pair of stops. the smaller identifier is always stored first, so
/// `StopPair::new(a, b) == StopPair::new(b, a)`.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StopPair {
    a: StopId,
    b: StopId,
}

impl StopPair {
    pub fn new(x: StopId, y: StopId) -> StopPair {
        if x <= y {
            StopPair { a: x, b: y }
        } else {
            StopPair { a: y, b: x }
        }
    }

    pub fn endpoints(&self) -> (&StopId, &StopId) {
        (&self.a, &self.b)
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl Display for StopPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
