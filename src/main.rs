mod components;
mod model;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
