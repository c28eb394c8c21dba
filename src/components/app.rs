use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use super::{drag_element::DragElement, reset_button::ResetButton};
use crate::model::{WidgetAction, WidgetState};
use crate::settings::Settings;
use crate::util::{clog, rect_size};

fn measure(node: &NodeRef) -> Option<crate::geometry::Size> {
    node.cast::<Element>().map(|el| rect_size(&el))
}

#[function_component(App)]
pub fn app() -> Html {
    let container_ref = use_node_ref();
    let element_ref = use_node_ref();
    let widget = use_reducer(|| WidgetState::new(Settings::load()));
    let reset_timeout = use_mut_ref(|| None::<Timeout>);

    // Initial centering, then follow window resizes
    {
        let container_ref = container_ref.clone();
        let element_ref = element_ref.clone();
        let dispatcher = widget.dispatcher();
        let reset_timeout = reset_timeout.clone();
        use_effect_with((), move |_| {
            if let (Some(container), Some(element)) = (measure(&container_ref), measure(&element_ref)) {
                clog(&format!(
                    "setup: container {}x{}, element {}x{}",
                    container.width, container.height, element.width, element.height
                ));
                dispatcher.dispatch(WidgetAction::Setup { container, element });
            }
            let resize = web_sys::window().map(|win| {
                EventListener::new(&win, "resize", move |_| {
                    if let Some(container) = measure(&container_ref) {
                        dispatcher.dispatch(WidgetAction::Resize { container });
                    }
                })
            });
            move || {
                drop(resize);
                // Dropping a pending timeout cancels it
                reset_timeout.borrow_mut().take();
            }
        });
    }

    let on_reset = {
        let container_ref = container_ref.clone();
        let dispatcher = widget.dispatcher();
        let reset_timeout = reset_timeout.clone();
        let delay_ms = widget.settings.reset_transition_ms;
        Callback::from(move |_| {
            let Some(container) = measure(&container_ref) else {
                return;
            };
            clog("reset: centering element");
            dispatcher.dispatch(WidgetAction::Reset { container });

            let done = {
                let dispatcher = dispatcher.clone();
                move || dispatcher.dispatch(WidgetAction::TransitionDone)
            };
            // Replacing the handle cancels an earlier reset still in flight
            *reset_timeout.borrow_mut() = Some(Timeout::new(delay_ms, done));
        })
    };

    html! {
        <div id="app" ref={container_ref.clone()}>
            <DragElement
                widget={widget.clone()}
                element_ref={element_ref.clone()}
                container_ref={container_ref.clone()}
            />
            <ResetButton {on_reset} />
        </div>
    }
}
