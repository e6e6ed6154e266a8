use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestCache, RequestInit, Response};
use yew::prelude::*;

use super::puzzle_view::PuzzleView;
use crate::config::{self, Settings};
use crate::error::{FetchError, LoadError};
use crate::model::{Direction, Puzzle};
use crate::util::{clog, cwarn, js_error_message};

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Failed(String),
    Ready(Rc<Puzzle>),
}

async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let init = RequestInit::new();
    init.set_cache(RequestCache::NoStore);
    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;
    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    let body = resp.text().map_err(|e| FetchError::Network(js_error_message(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;
    Ok(text.as_string().unwrap_or_default())
}

async fn load_puzzle(url: &str) -> Result<Puzzle, LoadError> {
    let raw = fetch_text(url).await?;
    Ok(Puzzle::from_json(&raw)?)
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(Settings::load);
    let query_url = use_state(config::query_override);
    let load = use_state(|| LoadState::Loading);
    let puzzle_url = settings.effective_url(query_url.as_deref()).to_string();

    // (Re)load whenever the puzzle URL changes
    {
        let load = load.clone();
        use_effect_with(puzzle_url.clone(), move |url| {
            let url = url.clone();
            load.set(LoadState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match load_puzzle(&url).await {
                    Ok(puzzle) => {
                        let size = puzzle.grid.size();
                        clog(&format!(
                            "loaded {url}: {}x{}, {} across, {} down",
                            size.rows,
                            size.cols,
                            puzzle.layout.slots(Direction::Across).len(),
                            puzzle.layout.slots(Direction::Down).len()
                        ));
                        load.set(LoadState::Ready(Rc::new(puzzle)));
                    }
                    Err(err) => {
                        cwarn(&format!("failed to load {url}: {err}"));
                        load.set(LoadState::Failed(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_settings = {
        let settings = settings.clone();
        Callback::from(move |next: Settings| {
            next.save();
            settings.set(next);
        })
    };

    let content = match &*load {
        LoadState::Loading => html! { <div class="status">{"Loading puzzle…"}</div> },
        LoadState::Failed(msg) => html! {
            <div class="status" style="color:#f85149;">
                <div style="font-weight:600;">{"Failed to load puzzle."}</div>
                <div style="font-size:12px; opacity:0.8;">{ msg.clone() }</div>
            </div>
        },
        LoadState::Ready(puzzle) => html! {
            <PuzzleView
                puzzle={puzzle.clone()}
                puzzle_url={AttrValue::from(puzzle_url.clone())}
                settings={(*settings).clone()}
                on_settings={on_settings}
            />
        },
    };

    html! { <div id="root" style="display:flex; justify-content:center; padding:12px;">{ content }</div> }
}
