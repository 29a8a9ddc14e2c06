use crate::app::App;

mod app;
mod catalog_grid;
mod components;
mod popup_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
