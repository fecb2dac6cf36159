use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"Data provided by Ontario IESO"}</p>
        </footer>
    }
}
