use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResetButtonProps {
    pub on_reset: Callback<()>,
}

#[function_component(ResetButton)]
pub fn reset_button(props: &ResetButtonProps) -> Html {
    let onclick = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! { <button id="reset-button" type="button" {onclick}>{"Reset"}</button> }
}
