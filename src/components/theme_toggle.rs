use yew::prelude::*;

use crate::hooks::use_theme::{Theme, ThemeHandle};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub handle: ThemeHandle,
}

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let (icon, label) = match props.handle.effective_theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        Theme::Light | Theme::Auto => ("🌙", "Switch to dark mode"),
    };

    let onclick = props.handle.toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}
