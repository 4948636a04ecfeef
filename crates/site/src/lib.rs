//! JavaScript entry points for the storefront pages.
//!
//! Each page loads this module and calls its own installer:
//!
//! ```js
//! import init, { install_login_page } from "./storefront_site.js";
//! await init();
//! install_login_page();
//! ```

mod pages;

pub use pages::{install_home_page, install_login_page, install_register_page, HomePage};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
