//! Page-level installation rules: when a behavior attaches, and how the homepage combines its
//! two independent widgets.

use crate::error::WidgetSetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// When a form validator attaches to the page.
pub enum InstallTiming {
    /// The document is already parsed; attach now.
    Immediately,
    /// The document is still loading; attach on `DOMContentLoaded`.
    OnDomContentLoaded,
}

/// Picks the install timing from the document's loading state.
pub fn install_timing(document_loading: bool) -> InstallTiming {
    if document_loading {
        InstallTiming::OnDomContentLoaded
    } else {
        InstallTiming::Immediately
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Widgets that made it onto the homepage. At least one is present.
pub struct HomepageSetup<S, M> {
    /// Running slider, if it installed.
    pub slider: Option<S>,
    /// Running menu toggle, if it installed.
    pub menu: Option<M>,
}

/// Combines the slider and menu toggle setup results.
///
/// A failed widget is dropped and the other kept.
///
/// # Errors
///
/// Returns the slider error when both widgets failed.
pub fn combine_homepage_setup<S, M>(
    slider: Result<S, WidgetSetupError>,
    menu: Result<M, WidgetSetupError>,
) -> Result<HomepageSetup<S, M>, WidgetSetupError> {
    match (slider, menu) {
        (Err(slider_err), Err(_)) => Err(slider_err),
        (slider, menu) => Ok(HomepageSetup {
            slider: slider.ok(),
            menu: menu.ok(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn missing(selector: &str) -> WidgetSetupError {
        WidgetSetupError::ElementNotFound {
            selector: selector.to_string(),
        }
    }

    #[test]
    fn loading_document_defers_install() {
        assert_eq!(install_timing(true), InstallTiming::OnDomContentLoaded);
        assert_eq!(install_timing(false), InstallTiming::Immediately);
    }

    #[test]
    fn both_widgets_installed() {
        assert_eq!(
            combine_homepage_setup::<_, &str>(Ok(3_usize), Ok("menu")),
            Ok(HomepageSetup {
                slider: Some(3),
                menu: Some("menu"),
            })
        );
    }

    #[test]
    fn missing_slides_keep_menu_toggle() {
        let slides = WidgetSetupError::NoSlides {
            selector: ".hero-slider .slide".to_string(),
        };
        assert_eq!(
            combine_homepage_setup::<usize, _>(Err(slides), Ok("menu")),
            Ok(HomepageSetup {
                slider: None,
                menu: Some("menu"),
            })
        );
    }

    #[test]
    fn missing_navbar_keeps_slider() {
        assert_eq!(
            combine_homepage_setup::<_, &str>(Ok(3_usize), Err(missing(".navbar"))),
            Ok(HomepageSetup {
                slider: Some(3),
                menu: None,
            })
        );
    }

    #[test]
    fn both_failing_reports_slider_error() {
        let slides = WidgetSetupError::NoSlides {
            selector: ".slide".to_string(),
        };
        assert_eq!(
            combine_homepage_setup::<usize, &str>(Err(slides.clone()), Err(missing(".navbar"))),
            Err(slides)
        );
    }
}
