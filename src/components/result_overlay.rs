use crate::state::SessionEvent;
use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultOverlayProps {
    pub event: Option<SessionEvent>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ResultOverlay(props: &ResultOverlayProps) -> Html {
    let Some(event) = props.event else {
        return html! {};
    };
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let (title, color, detail) = match event {
        SessionEvent::Solved { revealed: false, elapsed_secs } => {
            ("All correct!", "#2ea043", format!("Time: {}", format_time(elapsed_secs)))
        }
        SessionEvent::Solved { revealed: true, .. } => {
            ("Revealed", "#58a6ff", "The answers have been filled in.".to_string())
        }
        SessionEvent::IncorrectFull => (
            "Not quite",
            "#f85149",
            "Sorry, something is still wrong.".to_string(),
        ),
    };
    html! {
        <div style={format!("position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); color:#fff; border:2px solid {color}; padding:24px 32px; border-radius:12px; text-align:center; min-width:280px; z-index:40;")}>
            <h2 style={format!("margin:0 0 12px 0; color:{color};")}>{ title }</h2>
            <p style="margin:4px 0;">{ detail }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={close_btn}>{"OK"}</button>
            </div>
        </div>
    }
}
