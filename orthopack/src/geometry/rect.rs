use crate::geometry::Point;
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle with integer coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: u64,
    pub y_min: u64,
    pub x_max: u64,
    pub y_max: u64,
}

impl Rect {
    pub fn try_new(x_min: u64, y_min: u64, x_max: u64, y_max: u64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Rectangle of the given dimensions with its bottom-left corner at `anchor`.
    #[inline(always)]
    pub fn from_anchor(anchor: Point, width: u64, height: u64) -> Self {
        Rect {
            x_min: anchor.x,
            y_min: anchor.y,
            x_max: anchor.x + width,
            y_max: anchor.y + height,
        }
    }

    pub fn width(&self) -> u64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> u64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    pub fn bottom_left(&self) -> Point {
        Point {
            x: self.x_min,
            y: self.y_min,
        }
    }

    /// The two anchor points a subsequent rectangle can be placed against:
    /// the bottom-right corner and the top-left corner.
    pub fn anchor_points(&self) -> [Point; 2] {
        [
            Point {
                x: self.x_max,
                y: self.y_min,
            },
            Point {
                x: self.x_min,
                y: self.y_max,
            },
        ]
    }
}
