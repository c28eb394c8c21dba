use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::geometry::{Point, distance};
use crate::model::{WidgetAction, WidgetState};
use crate::util::{clog, rect_size, touch_points};

#[derive(Properties, PartialEq, Clone)]
pub struct DragElementProps {
    pub widget: UseReducerHandle<WidgetState>,
    pub element_ref: NodeRef,
    pub container_ref: NodeRef,
}

fn pointer_of(e: &PointerEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

#[function_component(DragElement)]
pub fn drag_element(props: &DragElementProps) -> Html {
    // Listeners are installed once; they read the latest state through this ref.
    let widget_ref = use_mut_ref(|| props.widget.clone());
    {
        let widget_ref = widget_ref.clone();
        let handle = props.widget.clone();
        use_effect_with(props.widget.version, move |_| {
            *widget_ref.borrow_mut() = handle;
            || ()
        });
    }

    let onpointerdown = {
        let dispatcher = props.widget.dispatcher();
        Callback::from(move |e: PointerEvent| {
            if !e.is_primary() {
                return;
            }
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if let Err(err) = target.set_pointer_capture(e.pointer_id()) {
                    clog(&format!("pointer capture failed: {err:?}"));
                }
            }
            dispatcher.dispatch(WidgetAction::DragStart {
                pointer_id: e.pointer_id(),
                is_primary: true,
                pointer: pointer_of(&e),
            });
        })
    };

    {
        let element_ref = props.element_ref.clone();
        let container_ref = props.container_ref.clone();
        let dispatcher = props.widget.dispatcher();
        use_effect_with((), move |_| {
            let container_size = move || container_ref.cast::<Element>().map(|el| rect_size(&el));
            let element = element_ref.cast::<Element>();
            let mut listeners: Vec<EventListener> = Vec::new();

            if let Some(win) = web_sys::window() {
                let move_cb = {
                    let dispatcher = dispatcher.clone();
                    let container_size = container_size.clone();
                    move |e: &Event| {
                        let (Some(e), Some(container)) =
                            (e.dyn_ref::<PointerEvent>(), container_size())
                        else {
                            return;
                        };
                        dispatcher.dispatch(WidgetAction::DragMove {
                            pointer_id: e.pointer_id(),
                            pointer: pointer_of(e),
                            container,
                        });
                    }
                };
                listeners.push(EventListener::new(&win, "pointermove", move_cb));

                let end_cb = || {
                    let dispatcher = dispatcher.clone();
                    let element = element.clone();
                    move |e: &Event| {
                        if let (Some(el), Some(e)) = (&element, e.dyn_ref::<PointerEvent>()) {
                            if el.has_pointer_capture(e.pointer_id()) {
                                let _ = el.release_pointer_capture(e.pointer_id());
                            }
                        }
                        dispatcher.dispatch(WidgetAction::DragEnd);
                    }
                };
                listeners.push(EventListener::new(&win, "pointerup", end_cb()));
                listeners.push(EventListener::new(&win, "pointercancel", end_cb()));
            }

            if let Some(el) = element.clone() {
                let start_cb = {
                    let dispatcher = dispatcher.clone();
                    let widget_ref = widget_ref.clone();
                    let el = el.clone();
                    move |e: &Event| {
                        let Some((a, Some(b))) = e
                            .dyn_ref::<TouchEvent>()
                            .and_then(|e| touch_points(&e.touches()))
                        else {
                            return;
                        };
                        // A pinch takes over from any single-finger drag
                        if let Some(id) = widget_ref.borrow().drag.active_pointer_id {
                            if el.has_pointer_capture(id) {
                                let _ = el.release_pointer_capture(id);
                            }
                        }
                        dispatcher.dispatch(WidgetAction::PinchStart {
                            distance: distance(a, Some(b)),
                        });
                    }
                };
                listeners.push(EventListener::new(&el, "touchstart", start_cb));

                let move_cb = {
                    let dispatcher = dispatcher.clone();
                    let container_size = container_size.clone();
                    move |e: &Event| {
                        let Some((a, Some(b))) = e
                            .dyn_ref::<TouchEvent>()
                            .and_then(|e| touch_points(&e.touches()))
                        else {
                            return;
                        };
                        let Some(container) = container_size() else {
                            return;
                        };
                        dispatcher.dispatch(WidgetAction::PinchMove {
                            distance: distance(a, Some(b)),
                            container,
                        });
                    }
                };
                listeners.push(EventListener::new(&el, "touchmove", move_cb));

                let end_cb = || {
                    let dispatcher = dispatcher.clone();
                    move |e: &Event| {
                        let remaining = e
                            .dyn_ref::<TouchEvent>()
                            .map_or(0, |e| e.touches().length());
                        if remaining < 2 {
                            dispatcher.dispatch(WidgetAction::PinchEnd);
                        }
                    }
                };
                listeners.push(EventListener::new(&el, "touchend", end_cb()));
                listeners.push(EventListener::new(&el, "touchcancel", end_cb()));
            }

            move || drop(listeners)
        });
    }

    html! {
        <div
            id="drag-element"
            ref={props.element_ref.clone()}
            style={props.widget.style()}
            {onpointerdown}
        >
            {"Drag me"}
        </div>
    }
}
