use wasm_bindgen::prelude::*;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Route `log` output to the browser console and install the panic hook.
///
/// `level` is a `log` level name ("error" through "trace"); omitted means info.
/// Safe to call more than once: only the first logger install takes effect.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = match level.as_deref() {
        Some(name) => name
            .parse::<log::Level>()
            .map_err(|e| JsValue::from(js_sys::Error::new(&format!("{}: {:?}", e, name))))?,
        None => DEFAULT_LOG_LEVEL,
    };
    console_log::init_with_level(level).ok();
    log::info!("domops logging at {}", level);
    Ok(())
}
