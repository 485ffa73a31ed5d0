use yew::prelude::*;

use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct NavTabsProps {
    pub page: Page,
    pub on_change: Callback<Page>,
}

/// Page switcher in the header
#[function_component(NavTabs)]
pub fn nav_tabs(props: &NavTabsProps) -> Html {
    html! {
        <nav class="nav-tabs" aria-label="Dashboard pages">
            {
                Page::all().iter().map(|&page| {
                    let selected = page == props.page;
                    let class = classes!("nav-tab", selected.then_some("active"));
                    let onclick = props.on_change.reform(move |_: MouseEvent| page);
                    html! {
                        <button
                            key={page.key()}
                            {class}
                            {onclick}
                            aria-current={selected.then_some("page")}
                        >
                            {page.title()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
