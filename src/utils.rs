pub fn set_panic_hook() {
    // Forwards Rust panics to the browser console as `console.error` with a
    // readable message instead of an opaque `unreachable` trap.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
