use storefront_contract::{
    HomepageConfig, LoginFormConfig, MenuVisibility, RegisterFormConfig, SlideIndex,
    WidgetSetupError,
};

fn unsupported() -> WidgetSetupError {
    WidgetSetupError::Dom(
        "browser DOM APIs are only available when compiled for wasm32".to_string(),
    )
}

#[derive(Debug, Default)]
/// Homepage widget handle. Never holds running widgets outside the browser.
pub struct HomepageWidgets;

impl HomepageWidgets {
    /// Always `None` outside the browser.
    pub fn active_slide(&self) -> Option<SlideIndex> {
        None
    }

    /// Always `None` outside the browser.
    pub fn menu_visibility(&self) -> Option<MenuVisibility> {
        None
    }

    /// Always `false` outside the browser.
    pub fn is_rotating(&self) -> bool {
        false
    }

    /// No-op outside the browser.
    pub fn stop_slider(&mut self) {}
}

pub fn install_login_validator(_config: LoginFormConfig) -> Result<(), WidgetSetupError> {
    Err(unsupported())
}

pub fn install_register_validator(_config: RegisterFormConfig) -> Result<(), WidgetSetupError> {
    Err(unsupported())
}

pub fn install_homepage_widgets(
    _config: HomepageConfig,
) -> Result<HomepageWidgets, WidgetSetupError> {
    Err(unsupported())
}
