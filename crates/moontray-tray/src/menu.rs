//! Tray menu model and its xbar-format rendering.

use crate::CameraView;

/// Actions that can be triggered from the tray menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Open a URL in the default browser.
    OpenUrl(String),
    /// Poll the printer again immediately.
    Refresh,
}

/// A single menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text.
    pub label: String,
    /// Whether the item is enabled (clickable).
    pub enabled: bool,
    /// Optional action triggered on click.
    pub action: Option<MenuAction>,
}

impl MenuItem {
    fn info(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            action: None,
        }
    }

    fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            action: Some(action),
        }
    }

    fn separator() -> Self {
        Self::info(String::new())
    }

    /// Returns true for the separator placeholder.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.label.is_empty() && self.action.is_none()
    }
}

/// Current state used to build the tray menu.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Text shown next to the tray icon.
    pub title: String,
    /// Informational lines shown at the top of the menu.
    pub details: Vec<String>,
    /// Printer web interface URL.
    pub printer_url: String,
    /// Camera view, when a camera is configured.
    pub camera: Option<CameraView>,
}

impl MenuState {
    /// Creates a menu state with no details and no camera.
    #[must_use]
    pub fn new(title: impl Into<String>, printer_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
            printer_url: printer_url.into(),
            camera: None,
        }
    }

    /// Builds the menu items from the current state.
    #[must_use]
    pub fn build_menu(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = self.details.iter().map(MenuItem::info).collect();
        if !items.is_empty() {
            items.push(MenuItem::separator());
        }

        items.push(MenuItem::action(
            "Open printer UI",
            MenuAction::OpenUrl(self.printer_url.clone()),
        ));

        if let Some(camera) = &self.camera {
            let mut live = camera.clone();
            items.push(MenuItem::action(
                "Camera stream",
                MenuAction::OpenUrl(live.show().to_string()),
            ));
            items.push(MenuItem::action(
                "Camera snapshot",
                MenuAction::OpenUrl(live.hide().to_string()),
            ));
        }

        items.push(MenuItem::separator());
        items.push(MenuItem::action("Refresh", MenuAction::Refresh));

        items
    }

    /// Renders the title and menu in the xbar/SwiftBar/Argos plugin format.
    ///
    /// The first line is the menu-bar title, `---` starts the dropdown, and
    /// each following line is one item with its parameters after `|`.
    #[must_use]
    pub fn render_xbar(&self) -> String {
        let mut out = String::new();
        out.push_str(&sanitize(&self.title));
        out.push_str("\n---\n");

        for item in self.build_menu() {
            if item.is_separator() {
                out.push_str("---\n");
                continue;
            }
            let label = sanitize(&item.label);
            match item.action {
                Some(MenuAction::OpenUrl(url)) => {
                    out.push_str(&format!("{label} | href={url}\n"));
                }
                Some(MenuAction::Refresh) => {
                    out.push_str(&format!("{label} | refresh=true\n"));
                }
                None if !item.enabled => {
                    out.push_str(&format!("{label} | disabled=true\n"));
                }
                None => {
                    out.push_str(&label);
                    out.push('\n');
                }
            }
        }

        out
    }
}

/// `|` and newlines are structural in the plugin format.
fn sanitize(text: &str) -> String {
    text.replace('|', "/").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MenuState {
        let mut state = MenuState::new("Printing [42%]", "http://printer.local/");
        state.details = vec!["File: benchy.gcode".to_string()];
        state
    }

    #[test]
    fn test_build_menu_without_camera() {
        let items = state().build_menu();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0].label, "File: benchy.gcode");
        assert!(!items[0].enabled);
        assert!(items[1].is_separator());
        assert_eq!(
            items[2].action,
            Some(MenuAction::OpenUrl("http://printer.local/".to_string()))
        );
        assert!(items[3].is_separator());
        assert_eq!(items[4].action, Some(MenuAction::Refresh));
    }

    #[test]
    fn test_build_menu_with_camera_lists_both_sources() {
        let mut state = state();
        state.camera = Some(CameraView::new("http://cam/?action=stream", "http://cam/?action=snapshot"));
        let items = state.build_menu();

        let urls: Vec<_> = items
            .iter()
            .filter_map(|item| match &item.action {
                Some(MenuAction::OpenUrl(url)) => Some(url.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            urls,
            vec![
                "http://printer.local/",
                "http://cam/?action=stream",
                "http://cam/?action=snapshot"
            ]
        );
    }

    #[test]
    fn test_build_menu_without_details_has_no_leading_separator() {
        let items = MenuState::new("Standby", "http://printer.local/").build_menu();
        assert!(!items[0].is_separator());
    }

    #[test]
    fn test_render_xbar() {
        let rendered = state().render_xbar();
        assert_eq!(
            rendered,
            "Printing [42%]\n\
             ---\n\
             File: benchy.gcode | disabled=true\n\
             ---\n\
             Open printer UI | href=http://printer.local/\n\
             ---\n\
             Refresh | refresh=true\n"
        );
    }

    #[test]
    fn test_render_xbar_escapes_pipes() {
        let mut state = MenuState::new("a | b", "http://printer.local/");
        state.details = vec!["line\nbreak".to_string()];
        let rendered = state.render_xbar();
        assert!(rendered.starts_with("a / b\n---\nline break | disabled=true\n"));
    }
}
