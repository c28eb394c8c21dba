//! Widget state for the draggable, pinch-resizable element.
//! All gesture handling funnels through [`WidgetAction`] so the DOM layer only measures and dispatches.

use std::rc::Rc;
use yew::Reducible;

use crate::geometry::{Bounds, Point, Size, centered};
use crate::settings::Settings;
use crate::state::{DragState, PinchState, PinchStep, pinch};

/// Where the element sits inside the container and how big it is, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct WidgetState {
    /// `None` until the element has been measured once.
    pub layout: Option<Layout>,
    pub initial_size: Size,
    pub has_moved: bool,
    pub drag: DragState,
    pub pinch: PinchState,
    pub animating: bool,
    pub settings: Settings,
    pub version: u64,
}

pub enum WidgetAction {
    Setup { container: Size, element: Size },
    DragStart { pointer_id: i32, is_primary: bool, pointer: Point },
    DragMove { pointer_id: i32, pointer: Point, container: Size },
    DragEnd,
    PinchStart { distance: f64 },
    PinchMove { distance: f64, container: Size },
    PinchEnd,
    Reset { container: Size },
    TransitionDone,
    Resize { container: Size },
}

impl WidgetState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    fn center(&mut self, container: Size) {
        if let Some(layout) = self.layout.as_mut() {
            let c = centered(container, layout.size());
            layout.left = c.x;
            layout.top = c.y;
        }
    }

    fn bounds(&self, container: Size, element: Size) -> Bounds {
        Bounds::compute(container, element, self.settings.gutter)
    }

    pub fn cursor(&self) -> &'static str {
        if self.drag.is_dragging { "grabbing" } else { "grab" }
    }

    pub fn transition(&self) -> String {
        if self.animating {
            self.settings.reset_transition()
        } else {
            String::new()
        }
    }

    /// Inline style for the element. Position and size are left to CSS until measured.
    pub fn style(&self) -> String {
        let mut style = format!("cursor:{};", self.cursor());
        if let Some(l) = self.layout {
            style.push_str(&format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;",
                l.left, l.top, l.width, l.height
            ));
        }
        let transition = self.transition();
        if !transition.is_empty() {
            style.push_str(&format!("transition:{transition};"));
        }
        style
    }
}

impl Reducible for WidgetState {
    type Action = WidgetAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use WidgetAction::*;
        let mut new = (*self).clone();
        match action {
            Setup { container, element } => {
                new.initial_size = element;
                new.layout = Some(Layout {
                    left: 0.0,
                    top: 0.0,
                    width: element.width,
                    height: element.height,
                });
                new.center(container);
            }
            DragStart {
                pointer_id,
                is_primary,
                pointer,
            } => {
                if !is_primary || new.pinch.active {
                    return self;
                }
                let Some(l) = new.layout else {
                    return self;
                };
                new.drag.begin(pointer_id, pointer, l.left, l.top);
            }
            DragMove {
                pointer_id,
                pointer,
                container,
            } => {
                if new.pinch.active {
                    return self;
                }
                let (Some(l), Some((left, top))) =
                    (new.layout, new.drag.offset_for(pointer_id, pointer))
                else {
                    return self;
                };
                let (left, top) = new.bounds(container, l.size()).clamp_position(left, top);
                new.layout = Some(Layout { left, top, ..l });
                new.has_moved = true;
            }
            DragEnd => {
                if !new.drag.is_dragging {
                    return self;
                }
                new.drag.end();
            }
            PinchStart { distance } => {
                new.drag.end();
                new.pinch.begin(distance);
            }
            PinchMove {
                distance,
                container,
            } => {
                let step = new.pinch.step(distance);
                let Some(l) = new.layout else {
                    return self;
                };
                if step != PinchStep::Hold {
                    let floor = pinch::shrink_floor(new.initial_size, new.settings.min_size);
                    let size = pinch::resize(
                        l.size(),
                        step,
                        new.settings.pinch_step,
                        &new.bounds(container, l.size()),
                        floor,
                    );
                    let (left, top) = new.bounds(container, size).clamp_position(l.left, l.top);
                    new.layout = Some(Layout {
                        left,
                        top,
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            PinchEnd => {
                if !new.pinch.active {
                    return self;
                }
                new.pinch.end();
            }
            Reset { container } => {
                new.drag.end();
                new.pinch.end();
                new.center(container);
                new.has_moved = false;
                new.animating = true;
            }
            TransitionDone => {
                if !new.animating {
                    return self;
                }
                new.animating = false;
            }
            Resize { container } => {
                let Some(l) = new.layout else {
                    return self;
                };
                if new.has_moved {
                    let (left, top) = new.bounds(container, l.size()).clamp_position(l.left, l.top);
                    new.layout = Some(Layout { left, top, ..l });
                } else {
                    new.center(container);
                }
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
