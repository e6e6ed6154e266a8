use crate::input::{KEYBOARD_ROWS, Key};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct KeyboardProps {
    pub on_key: Callback<Key>,
}

#[function_component]
pub fn Keyboard(props: &KeyboardProps) -> Html {
    let key_btn = |key: Key, label: String, wide: bool| {
        let cb = props.on_key.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(key));
        let width = if wide { "min-width:52px;" } else { "min-width:28px;" };
        html! { <button type="button" {onclick} style={format!("{width} padding:10px 4px; font-size:14px;")}>{ label }</button> }
    };
    html! {<div id="keyboard" style="display:flex; flex-direction:column; gap:4px; align-items:center; user-select:none;">
        { for KEYBOARD_ROWS.iter().enumerate().map(|(i, row)| html! {
            <div class="row" style="display:flex; gap:4px;">
                { if i + 1 == KEYBOARD_ROWS.len() { key_btn(Key::Left, "←".to_string(), true) } else { html!{} } }
                { for row.chars().map(|ch| key_btn(Key::Letter(ch), ch.to_string(), false)) }
                { if i + 1 == KEYBOARD_ROWS.len() { key_btn(Key::Right, "→".to_string(), true) } else { html!{} } }
                { if i + 1 == KEYBOARD_ROWS.len() { key_btn(Key::Backspace, "⌫".to_string(), true) } else { html!{} } }
            </div>
        }) }
    </div>}
}
