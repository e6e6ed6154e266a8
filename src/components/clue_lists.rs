use std::rc::Rc;

use crate::model::{Direction, Puzzle};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClueListsProps {
    pub puzzle: Rc<Puzzle>,
    /// Active direction and slot index.
    pub active: Option<(Direction, usize)>,
    pub on_select: Callback<(Direction, usize)>,
}

#[function_component]
pub fn ClueLists(props: &ClueListsProps) -> Html {
    let list = |direction: Direction, heading: &'static str| {
        let items = props.puzzle.layout.slots(direction).iter().enumerate().map(|(index, slot)| {
            let active = props.active == Some((direction, index));
            let onclick = {
                let cb = props.on_select.clone();
                Callback::from(move |_: MouseEvent| cb.emit((direction, index)))
            };
            let style = if active {
                "cursor:pointer; padding:2px 6px; border-radius:4px; background:#dbe9ff; font-weight:600;"
            } else {
                "cursor:pointer; padding:2px 6px;"
            };
            html! { <li {onclick} style={style}>{ format!("{}. {}", slot.number, slot.clue) }</li> }
        });
        html! {
            <div style="flex:1; min-width:220px;">
                <h3 style="margin:4px 0;">{ heading }</h3>
                <ol id={direction.to_string()} style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:2px;">
                    { for items }
                </ol>
            </div>
        }
    };
    html! {<div id="clues" style="display:flex; gap:16px; flex-wrap:wrap;">
        { list(Direction::Across, "Across") }
        { list(Direction::Down, "Down") }
    </div>}
}
