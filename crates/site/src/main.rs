//! Binary entrypoint for the storefront page behaviors.

#[cfg(target_arch = "wasm32")]
fn main() {
    storefront_site::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `storefront_site` for wasm32 and load it from each page, then call `install_login_page`, `install_register_page`, or `install_home_page`."
    );
}
