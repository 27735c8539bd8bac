//! Console Logging
//!
//! Diagnostics go to the browser console, one line per event, prefixed
//! with the component tag: `[ItemList] GET success: 3 items`.
//! Off the browser (unit tests) lines go to stderr instead.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

pub fn info(tag: &str, message: &str) {
    emit(Level::Info, &format_line(tag, message));
}

pub fn warn(tag: &str, message: &str) {
    emit(Level::Warn, &format_line(tag, message));
}

pub fn error(tag: &str, message: &str) {
    emit(Level::Error, &format_line(tag, message));
}

fn format_line(tag: &str, message: &str) -> String {
    format!("[{}] {}", tag, message)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Info => web_sys::console::log_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Error => web_sys::console::error_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    eprintln!("{:?} {}", level, line);
}
