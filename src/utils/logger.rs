use std::env;

pub const DEBUG_ENV: &str = "POWERLINE_PROMPT_DEBUG";

pub fn debug_enabled() -> bool {
    env::var_os(DEBUG_ENV).is_some()
}

pub fn debug(message: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG] {}", message);
    }
}

pub fn debug_with_context(context: &str, message: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG] {}: {}", context, message);
    }
}
