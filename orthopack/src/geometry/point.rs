use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Integer point in the container's coordinate system, origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u64,
    pub y: u64,
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
