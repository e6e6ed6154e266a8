use crate::config::Settings;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub settings: Settings,
    pub puzzle_url: AttrValue,
    pub on_change: Callback<Settings>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_keyboard_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                show_keyboard: !current.show_keyboard,
                ..current.clone()
            })
        })
    };
    let toggle_timer_cb = {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |_| {
            cb.emit(Settings {
                auto_start_timer: !current.auto_start_timer,
                ..current.clone()
            })
        })
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:300px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.show_keyboard} onclick={toggle_keyboard_cb} />
                    <span>{"Show On-screen Keyboard"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.auto_start_timer} onclick={toggle_timer_cb} />
                    <span>{"Start Timer on Load"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{ format!("Puzzle: {}", props.puzzle_url) }</div>
            <button onclick={close_cb} style="align-self:flex-end;">{"Done"}</button>
        </div>
    </div>}
}
