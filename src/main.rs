mod components;
mod config;
mod controller;
mod dom;
mod listeners;
mod model;
mod resolve;
#[cfg(test)]
mod testing;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
