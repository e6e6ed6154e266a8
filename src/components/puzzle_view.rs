use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::{
    board::Board, clue_bar::ClueBar, clue_lists::ClueLists, controls_panel::ControlsPanel,
    keyboard::Keyboard, result_overlay::ResultOverlay, settings_modal::SettingsModal,
    time_display::TimeDisplay,
};
use crate::config::Settings;
use crate::input::{Key, command_for_key};
use crate::model::{Direction, Pos, Puzzle};
use crate::state::{Command, Session, SessionEvent};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct PuzzleViewProps {
    pub puzzle: Rc<Puzzle>,
    /// URL the puzzle was fetched from, which may differ from the stored one.
    pub puzzle_url: AttrValue,
    pub settings: Settings,
    pub on_settings: Callback<Settings>,
}

#[function_component(PuzzleView)]
pub fn puzzle_view(props: &PuzzleViewProps) -> Html {
    let session = {
        let puzzle = props.puzzle.clone();
        use_reducer(move || Session::new(puzzle))
    };
    let overlay = use_state(|| None::<SessionEvent>);
    let open_settings = use_state(|| false);

    // Physical keyboard + one-second ticker, installed once
    {
        let session = session.clone();
        let auto_start = props.settings.auto_start_timer;
        use_effect_with((), move |_| {
            if auto_start {
                session.dispatch(Command::StartTimer);
            }
            let window = web_sys::window();
            let tick = {
                let session = session.clone();
                Closure::wrap(Box::new(move || {
                    session.dispatch(Command::TickSecond);
                }) as Box<dyn FnMut()>)
            };
            let key_cb = {
                let session = session.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let chord = e.ctrl_key() || e.alt_key() || e.meta_key();
                    if let Some(cmd) = command_for_key(&e.key(), e.shift_key(), chord) {
                        e.prevent_default();
                        session.dispatch(cmd);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mut interval_id = None;
            if let Some(window) = &window {
                interval_id = window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        1000,
                    )
                    .ok();
                let _ = window
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = &window {
                    if let Some(id) = interval_id {
                        window.clear_interval_with_handle(id);
                    }
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
                drop(tick);
            }
        });
    }

    // Surface each new session event once
    {
        let overlay = overlay.clone();
        let latest = session.last_event();
        use_effect_with(latest.map(|(seq, _)| seq), move |_| {
            if let Some((seq, event)) = latest {
                clog(&format!("event #{seq}: {event:?}"));
                overlay.set(Some(event));
            }
            || ()
        });
    }

    let dispatch = |cmd: Command| {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(cmd.clone()))
    };
    let on_cell = {
        let session = session.clone();
        Callback::from(move |pos: Pos| session.dispatch(Command::SelectCell(pos)))
    };
    let on_select_slot = {
        let session = session.clone();
        Callback::from(move |(direction, index): (Direction, usize)| {
            session.dispatch(Command::SelectSlot { direction, index })
        })
    };
    let on_key = {
        let session = session.clone();
        Callback::from(move |key: Key| session.dispatch(key.command()))
    };
    let close_overlay = {
        let overlay = overlay.clone();
        Callback::from(move |_: ()| overlay.set(None))
    };
    let toggle_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_: ()| open_settings.set(!*open_settings))
    };

    let active = session.active_slot().map(|slot| (slot.direction, slot.number, slot.clue.clone()));
    let cursor = session.cursor().map(|c| (c.direction, c.slot_index));
    let timer = session.timer();

    html! {
        <div style="display:flex; flex-direction:column; gap:10px; max-width:720px; width:100%;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <div>
                    <div style="font-size:18px; font-weight:600;">{ props.puzzle.title.clone().unwrap_or_else(|| "Daily Crossword".to_string()) }</div>
                    { if let Some(date) = &props.puzzle.date { html!{ <div style="font-size:12px; opacity:0.7;">{ date.clone() }</div> } } else { html!{} } }
                </div>
                <TimeDisplay elapsed_secs={timer.elapsed_secs} running={timer.running} solved={session.is_solved()} on_start={dispatch(Command::StartTimer)} />
            </div>
            <ControlsPanel
                on_check={dispatch(Command::CheckSlot)}
                on_reveal={dispatch(Command::Reveal)}
                on_clear={dispatch(Command::Clear)}
                on_open_settings={toggle_settings.clone()}
            />
            <ClueBar
                active={active}
                on_prev={dispatch(Command::PrevSlot)}
                on_next={dispatch(Command::NextSlot)}
            />
            <Board session={session.clone()} on_cell={on_cell} />
            {
                if props.settings.show_keyboard {
                    html! { <Keyboard on_key={on_key} /> }
                } else {
                    html! {}
                }
            }
            <ClueLists puzzle={props.puzzle.clone()} active={cursor} on_select={on_select_slot} />
            <ResultOverlay event={*overlay} on_close={close_overlay} />
            <SettingsModal
                show={*open_settings}
                settings={props.settings.clone()}
                puzzle_url={props.puzzle_url.clone()}
                on_change={props.on_settings.clone()}
                on_close={toggle_settings}
            />
        </div>
    }
}
