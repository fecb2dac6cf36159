use yew::prelude::*;

/// Top-level views reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Analytics,
    About,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Analytics => "Analytics",
            Page::About => "About",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_link = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        let class = classes!("nav-link", (props.current == page).then_some("active"));

        html! {
            <a href="#" {class} {onclick}>{page.label()}</a>
        }
    };

    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Analytics);
        })
    };

    html! {
        <header class="app-header">
            <div class="header-inner">
                <a href="#" class="brand" onclick={home}>
                    <span class="brand-icon">{"⚡"}</span>
                    <span class="brand-title">{"Ontario Energy Forecast"}</span>
                </a>
                <nav class="header-nav">
                    {nav_link(Page::Analytics)}
                    {nav_link(Page::About)}
                </nav>
            </div>
        </header>
    }
}
