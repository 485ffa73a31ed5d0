use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::Config;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference. `Auto` follows the operating system.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    /// Resolves `Auto` against the system preference; explicit choices win.
    pub const fn resolve(self, system_prefers_dark: bool) -> Self {
        match self {
            Self::Auto if system_prefers_dark => Self::Dark,
            Self::Auto => Self::Light,
            other => other,
        }
    }

    /// Theme after a click on the toggle
    pub const fn toggled(self, system_prefers_dark: bool) -> Self {
        match self.resolve(system_prefers_dark) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value for the `data-theme` attribute
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light | Self::Auto => "light",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Handle returned by `use_theme` hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub effective_theme: Theme,
    pub toggle: Callback<()>,
}

/// Theme preference with system fallback, applied to `<html data-theme>`
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_theme_preference().unwrap_or_default());
    let system_dark = use_state(system_prefers_dark);

    let effective_theme = theme.resolve(*system_dark);

    use_effect_with(effective_theme, move |theme| {
        apply_theme_to_dom(*theme);
        || ()
    });

    {
        let setter = system_dark.setter();
        use_effect_with((), move |_| {
            let listener = watch_system_preference(setter);
            move || drop(listener)
        });
    }

    use_effect_with(*theme, move |theme| {
        save_theme_preference(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        let system_dark = *system_dark;
        Callback::from(move |()| theme.set(theme.toggled(system_dark)))
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

fn apply_theme_to_dom(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(e) = html.set_attribute("data-theme", theme.attribute()) {
        gloo::console::warn!(&format!("Failed to apply theme: {e:?}"));
    }
}

fn load_theme_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(Config::THEME_STORAGE_KEY).ok()
}

fn save_theme_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::THEME_STORAGE_KEY, theme) {
        gloo::console::warn!(&format!("Failed to save theme: {e:?}"));
    }
}

/// Keeps `setter` in sync with the OS color scheme while the listener lives
fn watch_system_preference(setter: UseStateSetter<bool>) -> Option<EventListener> {
    let query = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()??;
    let target = query.dyn_into::<web_sys::EventTarget>().ok()?;

    Some(EventListener::new(&target, "change", move |_| {
        setter.set(system_prefers_dark());
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_system() {
        assert_eq!(Theme::Auto.resolve(true), Theme::Dark);
        assert_eq!(Theme::Auto.resolve(false), Theme::Light);
        assert_eq!(Theme::Light.resolve(true), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        assert_eq!(Theme::Auto.toggled(true), Theme::Light);
        assert_eq!(Theme::Auto.toggled(false), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(false), Theme::Light);
    }
}
