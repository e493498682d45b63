//! Browser entry point. Trunk builds this binary for wasm32 with the `csr`
//! feature; without it (plain `cargo test` / `cargo check`) main is a no-op.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("onboard {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(onboard::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
