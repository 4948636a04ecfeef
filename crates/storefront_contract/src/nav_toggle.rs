//! Mobile navigation toggle: one injected control flips the menu's visibility marker.

use crate::{
    error::WidgetSetupError,
    surface::{NavBar, NavMenu},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Expanded state of the navigation menu.
pub enum MenuVisibility {
    /// Marker absent; the stylesheet collapses the menu.
    Hidden,
    /// Marker present; the menu is expanded.
    Visible,
}

impl MenuVisibility {
    /// Maps marker presence to a visibility state.
    pub fn from_marker(present: bool) -> Self {
        if present {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

/// Creates the toggle control and inserts it as the first child of `bar`.
///
/// Call once per page; each call inserts another control.
///
/// # Errors
///
/// Returns [`WidgetSetupError::Dom`] when the control cannot be created or inserted.
pub fn insert_menu_toggle<B: NavBar + ?Sized>(
    bar: &B,
    toggle_class: &str,
    label: &str,
) -> Result<B::Control, WidgetSetupError> {
    bar.prepend_control(toggle_class, label).map_err(WidgetSetupError::Dom)
}

#[derive(Debug)]
/// Click handler logic for the menu toggle control.
///
/// Visibility lives on the menu element itself; the controller keeps no copy of it.
pub struct MenuToggleController<M> {
    menu: M,
    visible_class: String,
}

impl<M: NavMenu> MenuToggleController<M> {
    /// Creates a controller flipping `visible_class` on `menu`.
    pub fn new(menu: M, visible_class: impl Into<String>) -> Self {
        Self {
            menu,
            visible_class: visible_class.into(),
        }
    }

    /// Handles one click on the toggle control.
    ///
    /// # Errors
    ///
    /// Returns the menu adapter error when the marker cannot be flipped.
    pub fn click(&self) -> Result<MenuVisibility, String> {
        self.menu
            .toggle_class(&self.visible_class)
            .map(MenuVisibility::from_marker)
    }

    /// Current visibility as read from the menu.
    pub fn visibility(&self) -> MenuVisibility {
        MenuVisibility::from_marker(self.menu.has_class(&self.visible_class))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::memory::{MemoryNavBar, MemoryNavMenu, MemoryNode};

    #[test]
    fn clicks_alternate_hidden_and_visible() {
        let toggle = MenuToggleController::new(MemoryNavMenu::default(), "show");
        assert_eq!(toggle.visibility(), MenuVisibility::Hidden);

        assert_eq!(toggle.click().expect("click"), MenuVisibility::Visible);
        assert_eq!(toggle.click().expect("click"), MenuVisibility::Hidden);
        assert_eq!(toggle.visibility(), MenuVisibility::Hidden);
    }

    #[test]
    fn click_only_touches_configured_marker() {
        let menu = MemoryNavMenu::default();
        menu.toggle_class("sticky").expect("seed");
        let toggle = MenuToggleController::new(menu.clone(), "show");

        toggle.click().expect("click");

        assert!(menu.has_class("sticky"));
        assert!(menu.has_class("show"));
    }

    #[test]
    fn toggle_is_inserted_once_as_first_child() {
        let bar = MemoryNavBar::with_children(["logo", "nav-links"]);

        let control = insert_menu_toggle(&bar, "menu-toggle", "\u{2630}").expect("insert");

        let children = bar.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], control);
        assert_eq!(
            children[0],
            MemoryNode {
                class_name: "menu-toggle".to_string(),
                text: "\u{2630}".to_string(),
            }
        );
        assert_eq!(
            children
                .iter()
                .filter(|node| node.class_name == "menu-toggle")
                .count(),
            1
        );
    }
}
