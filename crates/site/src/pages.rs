use leptos::logging;
use storefront_contract::{HomepageConfig, LoginFormConfig, MenuVisibility, RegisterFormConfig};
use storefront_web::{
    install_homepage_widgets, install_login_validator, install_register_validator, parse_options,
    setup_error_to_js, HomepageWidgets,
};
use wasm_bindgen::prelude::*;

/// Installs the login form validator. `options` may be omitted.
#[wasm_bindgen]
pub fn install_login_page(options: JsValue) -> Result<(), JsValue> {
    let config: LoginFormConfig = parse_options(options).map_err(setup_error_to_js)?;
    install_login_validator(config).map_err(|err| {
        logging::warn!("login page setup failed: {err}");
        setup_error_to_js(err)
    })
}

/// Installs the registration form validator. `options` may be omitted.
#[wasm_bindgen]
pub fn install_register_page(options: JsValue) -> Result<(), JsValue> {
    let config: RegisterFormConfig = parse_options(options).map_err(setup_error_to_js)?;
    install_register_validator(config).map_err(|err| {
        logging::warn!("register page setup failed: {err}");
        setup_error_to_js(err)
    })
}

/// Starts the homepage slider and menu toggle. `options` may be omitted.
///
/// Call after the slider and navigation markup has been parsed.
#[wasm_bindgen]
pub fn install_home_page(options: JsValue) -> Result<HomePage, JsValue> {
    let config: HomepageConfig = parse_options(options).map_err(setup_error_to_js)?;
    install_homepage_widgets(config)
        .map(|widgets| HomePage { widgets })
        .map_err(|err| {
            logging::warn!("home page setup failed: {err}");
            setup_error_to_js(err)
        })
}

/// Handle to the running homepage widgets.
#[wasm_bindgen]
pub struct HomePage {
    widgets: HomepageWidgets,
}

#[wasm_bindgen]
impl HomePage {
    /// Index of the active slide, or `undefined` when the slider is not running.
    #[wasm_bindgen(getter, js_name = activeSlide)]
    pub fn active_slide(&self) -> Option<u32> {
        self.widgets
            .active_slide()
            .and_then(|index| u32::try_from(index.0).ok())
    }

    /// Whether the navigation menu is expanded, or `undefined` without a menu toggle.
    #[wasm_bindgen(getter, js_name = menuVisible)]
    pub fn menu_visible(&self) -> Option<bool> {
        self.widgets
            .menu_visibility()
            .map(|visibility| visibility == MenuVisibility::Visible)
    }

    /// Stops slide rotation.
    #[wasm_bindgen(js_name = stopSlider)]
    pub fn stop_slider(&mut self) {
        self.widgets.stop_slider();
    }
}
