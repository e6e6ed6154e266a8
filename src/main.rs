use yew_crossword::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
