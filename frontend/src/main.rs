use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod session;
mod store;

fn main() {
    yew::Renderer::<App>::new().render();
}
