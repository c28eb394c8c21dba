use crate::geometry::Point;

// Pointer drag tracking: where the pointer went down and where the element was at that moment.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragState {
    pub is_dragging: bool,
    pub active_pointer_id: Option<i32>,
    pub start_pointer: Point,
    pub start_left: f64,
    pub start_top: f64,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pointer: Point, left: f64, top: f64) {
        self.is_dragging = true;
        self.active_pointer_id = Some(pointer_id);
        self.start_pointer = pointer;
        self.start_left = left;
        self.start_top = top;
    }

    /// New unclamped top-left for `pointer`, or `None` if this pointer is not the one dragging.
    pub fn offset_for(&self, pointer_id: i32, pointer: Point) -> Option<(f64, f64)> {
        if !self.is_dragging || self.active_pointer_id != Some(pointer_id) {
            return None;
        }
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        Some((self.start_left + dx, self.start_top + dy))
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }
}
