//! Theme Preferences
//!
//! Accent color and background image, persisted in local storage and applied
//! as CSS custom properties on the document root.

use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;

pub const ACCENT_KEY: &str = "devboard_accent";
pub const BACKGROUND_KEY: &str = "devboard_bg";

/// Color picker value when no accent is stored
pub const DEFAULT_ACCENT: &str = "#7c5cff";

const ACCENT_VAR: &str = "--accent-color";
const GLOW_VAR: &str = "--accent-glow";
const BACKGROUND_VAR: &str = "--bg-image";

/// Key-value persistence for preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`, raw strings (no JSON encoding)
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, ?err, "failed to persist preference");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            tracing::warn!(key, ?err, "failed to remove preference");
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub accent_color: Option<String>,
    pub background_image: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Theme {
    pub fn new(accent_color: &str, background_image: &str) -> Self {
        Self {
            accent_color: present(Some(accent_color.to_string())),
            background_image: present(Some(background_image.to_string())),
        }
    }

    /// Stored theme; unset or empty values fall back to the stylesheet defaults
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self {
            accent_color: present(store.get(ACCENT_KEY)),
            background_image: present(store.get(BACKGROUND_KEY)),
        }
    }

    /// Persist both keys. An absent background is stored as an empty string.
    pub fn save(&self, store: &impl PreferenceStore) {
        if let Some(accent) = &self.accent_color {
            store.set(ACCENT_KEY, accent);
        }
        store.set(BACKGROUND_KEY, self.background_image.as_deref().unwrap_or(""));
    }

    pub fn clear(store: &impl PreferenceStore) {
        store.remove(ACCENT_KEY);
        store.remove(BACKGROUND_KEY);
    }

    /// CSS custom properties to set on the document root
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::new();
        if let Some(accent) = &self.accent_color {
            props.push((ACCENT_VAR, accent.clone()));
            // 0x4d alpha = 30% glow
            props.push((GLOW_VAR, format!("0 0 15px {accent}4d")));
        }
        if let Some(bg) = &self.background_image {
            props.push((BACKGROUND_VAR, format!("url('{bg}')")));
        }
        props
    }

    pub fn apply(&self) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            tracing::warn!("no document root, theme not applied");
            return;
        };
        let style = root.style();
        for (name, value) in self.css_properties() {
            if let Err(err) = style.set_property(name, &value) {
                tracing::warn!(name, ?err, "failed to set theme property");
            }
        }
    }
}

/// Forget the stored theme and reload so the stylesheet defaults come back
pub fn reset_and_reload(store: &impl PreferenceStore) {
    Theme::clear(store);
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            tracing::error!(?err, "page reload failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn test_theme_survives_reload() {
        let store = MemoryStore::default();
        Theme::new("#ff5500", "https://example.com/bg.jpg").save(&store);

        let restored = Theme::load(&store);
        assert_eq!(restored.accent_color.as_deref(), Some("#ff5500"));
        assert_eq!(restored.background_image.as_deref(), Some("https://example.com/bg.jpg"));
    }

    #[test]
    fn test_empty_background_stored_but_not_applied() {
        let store = MemoryStore::default();
        Theme::new("#00ff00", "").save(&store);

        assert_eq!(store.get(BACKGROUND_KEY).as_deref(), Some(""));
        let restored = Theme::load(&store);
        assert_eq!(restored.background_image, None);
        assert!(restored.css_properties().iter().all(|(name, _)| *name != BACKGROUND_VAR));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStore::default();
        Theme::new("#123456", "bg.png").save(&store);
        Theme::clear(&store);
        assert_eq!(Theme::load(&store), Theme::default());
    }

    #[test]
    fn test_css_properties() {
        let props = Theme::new("#ff0000", "img.png").css_properties();
        assert_eq!(
            props,
            vec![
                (ACCENT_VAR, "#ff0000".to_string()),
                (GLOW_VAR, "0 0 15px #ff00004d".to_string()),
                (BACKGROUND_VAR, "url('img.png')".to_string()),
            ]
        );
        assert!(Theme::default().css_properties().is_empty());
    }
}
