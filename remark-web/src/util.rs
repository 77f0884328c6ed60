use remark_client::api::Time;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        name.parse().unwrap_or_else(|err| {
            tracing::warn!(%name, %err, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

pub fn format_time(t: &Time) -> String {
    t.with_timezone(&local_tz())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

pub fn place_cursor_at_end(textarea: &web_sys::HtmlTextAreaElement) {
    // selection offsets are in utf-16 code units
    let len = textarea.value().encode_utf16().count() as u32;
    if let Err(err) = textarea.focus() {
        tracing::debug!(?err, "failed focusing textarea");
    }
    if let Err(err) = textarea.set_selection_range(len, len) {
        tracing::debug!(?err, "failed moving textarea cursor to the end");
    }
}
