use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use storefront_contract::{
    combine_homepage_setup, enforce_decision, insert_menu_toggle, install_timing, HomepageConfig,
    InstallTiming, LoginFormConfig, LoginValidator, MenuToggleController, MenuVisibility,
    RegisterFormConfig, RegisterValidator, SlideIndex, SliderController, SubmitDecision,
    WidgetSetupError,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Window};

use crate::{
    dom,
    surface::{WebAlertService, WebForm, WebNavBar, WebNavMenu, WebSlideDeck, WebSubmitEvent},
    timer::IntervalHandle,
};

type SharedSlider = Rc<RefCell<SliderController<WebSlideDeck>>>;
type SharedMenuToggle = Rc<MenuToggleController<WebNavMenu>>;

#[derive(Debug)]
/// Running homepage widgets.
pub struct HomepageWidgets {
    slider: Option<SharedSlider>,
    interval: Option<IntervalHandle>,
    menu: Option<SharedMenuToggle>,
}

impl HomepageWidgets {
    /// Index of the active slide, or `None` when the slider failed to install.
    pub fn active_slide(&self) -> Option<SlideIndex> {
        self.slider
            .as_ref()
            .map(|slider| slider.borrow().active_index())
    }

    /// Menu visibility, or `None` when the toggle failed to install.
    pub fn menu_visibility(&self) -> Option<MenuVisibility> {
        self.menu.as_ref().map(|menu| menu.visibility())
    }

    /// Whether the rotation timer is still registered.
    pub fn is_rotating(&self) -> bool {
        self.interval.is_some()
    }

    /// Clears the rotation timer. The current slide stays active.
    pub fn stop_slider(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

pub fn install_login_validator(config: LoginFormConfig) -> Result<(), WidgetSetupError> {
    let document = dom::document(&dom::window()?)?;
    let form_selector = config.form_selector.clone();
    let validator = LoginValidator::new(config);
    when_dom_ready(&document, "login validator", move |document| {
        let form = WebForm::named_fields(dom::query(document, &form_selector)?);
        attach_submit_handler(form, move |form| validator.evaluate(form))
    })
}

pub fn install_register_validator(config: RegisterFormConfig) -> Result<(), WidgetSetupError> {
    let document = dom::document(&dom::window()?)?;
    when_dom_ready(&document, "register validator", move |document| {
        let element = dom::query(document, &config.form_selector)?;
        let form = WebForm::with_required(element, config.required_selector);
        attach_submit_handler(form, |form| RegisterValidator.evaluate(form))
    })
}

pub fn install_homepage_widgets(
    config: HomepageConfig,
) -> Result<HomepageWidgets, WidgetSetupError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let slider = start_slider(&window, &document, &config)
        .inspect_err(|err| logging::warn!("hero slider setup failed: {err}"));
    let menu = install_menu_toggle(&document, &config)
        .inspect_err(|err| logging::warn!("menu toggle setup failed: {err}"));
    let setup = combine_homepage_setup(slider, menu)?;

    let (slider, interval) = setup.slider.unzip();
    logging::log!(
        "homepage widgets installed (slider: {}, menu toggle: {})",
        slider.is_some(),
        setup.menu.is_some()
    );
    Ok(HomepageWidgets {
        slider,
        interval,
        menu: setup.menu,
    })
}

/// Runs `install` now if the document is parsed, otherwise on `DOMContentLoaded`.
fn when_dom_ready<F>(
    document: &Document,
    label: &'static str,
    install: F,
) -> Result<(), WidgetSetupError>
where
    F: FnOnce(&Document) -> Result<(), WidgetSetupError> + 'static,
{
    let loading = document.ready_state() == "loading";
    if install_timing(loading) == InstallTiming::Immediately {
        install(document)?;
        logging::log!("{label} installed");
        return Ok(());
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move |_event: web_sys::Event| {
        match install(&ready_document) {
            Ok(()) => logging::log!("{label} installed"),
            Err(err) => logging::warn!("{label} setup failed: {err}"),
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| {
            WidgetSetupError::Dom(format!("failed to listen for DOMContentLoaded: {err:?}"))
        })?;
    on_ready.forget();
    Ok(())
}

fn attach_submit_handler<F>(form: WebForm, evaluate: F) -> Result<(), WidgetSetupError>
where
    F: Fn(&WebForm) -> SubmitDecision + 'static,
{
    let target = form.element().clone();
    let handle_submit = move |event: web_sys::Event| {
        let decision = evaluate(&form);
        let submit = WebSubmitEvent(event);
        if let Err(err) = enforce_decision(&decision, &submit, &WebAlertService) {
            logging::warn!("validation alert failed: {err}");
        }
    };
    let on_submit = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handle_submit));
    target
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|err| {
            WidgetSetupError::Dom(format!("failed to attach submit listener: {err:?}"))
        })?;
    on_submit.forget();
    Ok(())
}

fn start_slider(
    window: &Window,
    document: &Document,
    config: &HomepageConfig,
) -> Result<(SharedSlider, IntervalHandle), WidgetSetupError> {
    let deck = WebSlideDeck::query(document, &config.slide_selector, config.active_class.clone())?;
    let slider = Rc::new(RefCell::new(SliderController::start(
        deck,
        &config.slide_selector,
    )?));

    let ticking = Rc::clone(&slider);
    let interval = IntervalHandle::every(window, config.interval_ms, move || {
        if let Err(err) = ticking.borrow_mut().advance() {
            logging::warn!("hero slider advance failed: {err}");
        }
    })?;
    Ok((slider, interval))
}

fn install_menu_toggle(
    document: &Document,
    config: &HomepageConfig,
) -> Result<SharedMenuToggle, WidgetSetupError> {
    let bar = WebNavBar(dom::query(document, &config.navbar_selector)?);
    let menu = WebNavMenu(dom::query(document, &config.nav_links_selector)?);

    let control = insert_menu_toggle(&bar, &config.toggle_class, &config.toggle_label)?;
    let toggle = Rc::new(MenuToggleController::new(menu, config.visible_class.clone()));

    let clicked = Rc::clone(&toggle);
    let handle_click = move |_: web_sys::Event| {
        if let Err(err) = clicked.click() {
            logging::warn!("menu toggle failed: {err}");
        }
    };
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handle_click));
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| {
            WidgetSetupError::Dom(format!("failed to attach click listener: {err:?}"))
        })?;
    on_click.forget();
    Ok(toggle)
}
