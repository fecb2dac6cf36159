use energy_dashboard::components::{Footer, Header, Page};
use energy_dashboard::pages::{About, Analytics};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let page = use_state(Page::default);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    html! {
        <div class="app-container">
            <Header current={*page} {on_navigate} />

            {
                match *page {
                    Page::Analytics => html! { <Analytics /> },
                    Page::About => html! { <About /> },
                }
            }

            <Footer />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
