pub mod drag;
pub mod pinch;

pub use drag::DragState;
pub use pinch::{PinchState, PinchStep};
