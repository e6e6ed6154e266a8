use crate::model::Direction;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClueBarProps {
    /// Direction, number and clue text of the active slot.
    pub active: Option<(Direction, u32, String)>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component]
pub fn ClueBar(props: &ClueBarProps) -> Html {
    let prev_cb = {
        let cb = props.on_prev.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next_cb = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (label, text) = match &props.active {
        Some((direction, number, clue)) => {
            let dir = match direction {
                Direction::Across => "A",
                Direction::Down => "D",
            };
            (format!("{number}{dir}"), clue.clone())
        }
        None => (String::new(), String::new()),
    };
    html! {<div style="display:flex; align-items:center; gap:8px; background:#dbe9ff; border-radius:8px; padding:6px 8px;">
        <button onclick={prev_cb} aria-label="Previous clue">{"‹"}</button>
        <span style="font-weight:700; min-width:36px;">{ label }</span>
        <span id="clue-text" style="flex:1;">{ text }</span>
        <button onclick={next_cb} aria-label="Next clue">{"›"}</button>
    </div>}
}
