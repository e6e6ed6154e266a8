use crate::model::Pos;
use crate::state::{CellStatus, Session};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub session: UseReducerHandle<Session>,
    pub on_cell: Callback<Pos>,
}

#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    let session = &props.session;
    let size = session.grid().size();
    let focus = session.cursor().map(|c| c.focus);

    let cell = |pos: Pos| -> Html {
        if !session.grid().is_white(pos) {
            return html! { <div class="cell black" style="background:#111;"></div> };
        }
        let background = if Some(pos) == focus {
            "#f7d046"
        } else if session.in_active_slot(pos) {
            "#a7d8ff"
        } else {
            "#fff"
        };
        let color = match session.mark(pos) {
            CellStatus::Correct => "#1a7f37",
            CellStatus::Incorrect => "#cf222e",
            CellStatus::Empty => "#111",
        };
        let onclick = {
            let cb = props.on_cell.clone();
            Callback::from(move |_: MouseEvent| cb.emit(pos))
        };
        html! {
            <div class="cell" {onclick} style={format!("position:relative; background:{background}; cursor:pointer; display:flex; align-items:center; justify-content:center;")}>
                { if let Some(n) = session.layout().number(pos) { html!{ <div class="num" style="position:absolute; top:1px; left:2px; font-size:10px; color:#333;">{ n }</div> } } else { html!{} } }
                <span style={format!("font-size:22px; font-weight:600; color:{color};")}>{ session.letter(pos).map(String::from).unwrap_or_default() }</span>
            </div>
        }
    };

    html! {
        <div id="grid" style={format!("display:grid; grid-template-columns:repeat({}, var(--cell-size, 44px)); grid-auto-rows:var(--cell-size, 44px); gap:1px; background:#111; border:2px solid #111; width:max-content; margin:0 auto;", size.cols)}>
            { for (0..size.rows).flat_map(|r| (0..size.cols).map(move |c| Pos::new(r, c))).map(cell) }
        </div>
    }
}
