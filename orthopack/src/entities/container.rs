use crate::geometry::{Rect, fits_in_container};
use serde::{Deserialize, Serialize};

/// The fixed rectangular area in which items are packed, spanning `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub width: u64,
    pub height: u64,
}

impl Container {
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0,
            y_min: 0,
            x_max: self.width,
            y_max: self.height,
        }
    }

    /// Does not overflow for the container of a valid [`Instance`](crate::entities::Instance)
    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    #[inline(always)]
    pub fn contains(&self, rect: &Rect) -> bool {
        fits_in_container(rect, self.width, self.height)
    }
}
