//! Player settings, persisted as JSON in `localStorage`.

use serde::{Deserialize, Serialize};

use crate::util::cwarn;

pub const STORAGE_KEY: &str = "xw_settings";
pub const DEFAULT_PUZZLE_URL: &str = "./puzzle.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub puzzle_url: String,
    pub auto_start_timer: bool,
    pub show_keyboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle_url: DEFAULT_PUZZLE_URL.to_string(),
            auto_start_timer: true,
            show_keyboard: true,
        }
    }
}

impl Settings {
    /// Parses stored settings; anything unreadable falls back to defaults.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                cwarn(&format!("ignoring stored settings: {err}"));
                Self::default()
            }),
        }
    }

    /// URL to fetch: the page's `?puzzle=` override if there is one, else the stored URL.
    /// The override is never written back into the settings.
    pub fn effective_url<'a>(&'a self, query_override: Option<&'a str>) -> &'a str {
        query_override.unwrap_or(&self.puzzle_url)
    }

    /// Stored settings only; the query override is read separately by [`query_override`].
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        Self::from_stored(stored.as_deref())
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(STORAGE_KEY, &s);
                }
            }
        }
    }
}

/// `?puzzle=<url>` of the current page, for this page load only.
pub fn query_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    puzzle_param(&search)
}

#[cfg(target_arch = "wasm32")]
fn puzzle_param(search: &str) -> Option<String> {
    match web_sys::UrlSearchParams::new_with_str(search) {
        Ok(params) => params.get("puzzle").filter(|v| !v.is_empty()),
        Err(_) => parse_query_param(search, "puzzle"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn puzzle_param(search: &str) -> Option<String> {
    parse_query_param(search, "puzzle")
}

/// Form-urlencoded lookup of `name`; empty values count as absent.
fn parse_query_param(search: &str, name: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
        .filter(|v| !v.is_empty())
}

fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => match raw
                .get(i + 1..i + 3)
                .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                .and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                Some(byte) => {
                    out.push(byte);
                    i += 2;
                }
                None => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
