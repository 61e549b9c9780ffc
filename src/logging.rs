// Console logging helpers. Everything here compiles to nothing off wasm32,
// so the simulation core can be tested natively without JS imports.

#[cfg(target_arch = "wasm32")]
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log {
    ( $( $t:tt )* ) => {
        if false {
            let _ = format!( $( $t )* );
        }
    };
}

#[cfg(target_arch = "wasm32")]
macro_rules! error {
    ( $( $t:tt )* ) => {
        web_sys::console::error_1(&format!( $( $t )* ).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! error {
    ( $( $t:tt )* ) => {
        if false {
            let _ = format!( $( $t )* );
        }
    };
}

// Scoped console timer, only active with the `frame-timing` feature
pub struct Timer<'a> {
    #[cfg_attr(
        not(all(target_arch = "wasm32", feature = "frame-timing")),
        allow(dead_code)
    )]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        web_sys::console::time_end_with_label(self.name);
    }
}
