// Modules stay unconditional so the logic tests run on the host target;
// only the mount itself is wasm-specific.
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::prelude::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
