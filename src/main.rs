mod components;
mod geometry;
mod model;
mod settings;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
