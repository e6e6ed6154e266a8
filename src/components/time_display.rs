use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub elapsed_secs: u64,
    pub running: bool,
    #[prop_or_default]
    pub solved: bool,
    pub on_start: Callback<()>,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if props.running { "Restart" } else { "Start" };
    html! {<div style="display:flex; align-items:center; gap:8px;">
        <div id="timer" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">{ format_time(props.elapsed_secs) }</div>
        <button onclick={start_cb} disabled={props.solved} style="padding:4px 10px; font-size:12px;">{ label }</button>
    </div>}
}
