use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    /// Accent color for the icon
    #[prop_or_else(|| AttrValue::from("var(--color-accent-blue)"))]
    pub accent: AttrValue,
}

/// Headline figure with an icon, used by the waste and water pages
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let icon_style = format!("color: {};", props.accent);

    html! {
        <div class="stat-card">
            <span class="stat-icon" style={icon_style} aria-hidden="true">{&props.icon}</span>
            <div class="stat-body">
                <h3>{&props.title}</h3>
                <p class="stat-value">{&props.value}</p>
                if let Some(caption) = &props.caption {
                    <p class="stat-caption">{caption}</p>
                }
            </div>
        </div>
    }
}
