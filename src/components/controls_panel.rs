use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub on_check: Callback<()>,
    pub on_reveal: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let check_cb = {
        let cb = props.on_check.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reveal_cb = {
        let cb = props.on_reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:6px; flex-wrap:wrap;">
        <button id="check" onclick={check_cb}>{"Check"}</button>
        <button id="reveal" onclick={reveal_cb}>{"Reveal"}</button>
        <button id="clear" onclick={clear_cb}>{"Clear"}</button>
        <span style="flex:1;"></span>
        <button onclick={settings_cb}>{"Settings"}</button>
    </div>}
}
