use crate::geometry::{Bounds, Size};

// Two-finger pinch tracking. Only the direction of change between samples matters,
// each sample resizes by a fixed step.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PinchState {
    pub active: bool,
    pub initial_distance: f64,
    pub last_distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchStep {
    Grow,
    Shrink,
    Hold,
}

impl PinchState {
    pub fn begin(&mut self, distance: f64) {
        self.active = true;
        self.initial_distance = distance;
        self.last_distance = distance;
    }

    pub fn step(&mut self, distance: f64) -> PinchStep {
        if !self.active {
            return PinchStep::Hold;
        }
        let step = if distance > self.last_distance {
            PinchStep::Grow
        } else if distance < self.last_distance {
            PinchStep::Shrink
        } else {
            PinchStep::Hold
        };
        self.last_distance = distance;
        step
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}

/// Smallest size a pinch may shrink to: a quarter of the initial size, but never below `min_size`.
pub fn shrink_floor(initial: Size, min_size: f64) -> Size {
    Size {
        width: min_size.max(initial.width / 4.0),
        height: min_size.max(initial.height / 4.0),
    }
}

pub fn resize(size: Size, step: PinchStep, amount: f64, bounds: &Bounds, floor: Size) -> Size {
    match step {
        // Capped by the container, but never smaller than before
        PinchStep::Grow => Size {
            width: (size.width + amount).min(bounds.max_width).max(size.width),
            height: (size.height + amount).min(bounds.max_height).max(size.height),
        },
        PinchStep::Shrink => Size {
            width: (size.width - amount).max(floor.width),
            height: (size.height - amount).max(floor.height),
        },
        PinchStep::Hold => size,
    }
}
