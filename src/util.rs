// Small DOM helpers shared by the components.
use wasm_bindgen::JsValue;
use web_sys::{Element, TouchList};

use crate::geometry::{Point, Size};

pub fn clog(msg: &str) {
    // Console output only in debug builds
    if cfg!(debug_assertions) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn rect_size(el: &Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// First two touches of the list; the second is `None` for a single-finger touch.
pub fn touch_points(touches: &TouchList) -> Option<(Point, Option<Point>)> {
    let to_point = |t: web_sys::Touch| Point::new(t.client_x() as f64, t.client_y() as f64);
    let first = touches.item(0).map(to_point)?;
    Some((first, touches.item(1).map(to_point)))
}
