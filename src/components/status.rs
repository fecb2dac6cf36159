use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    /// True while either feed is still being fetched
    pub loading: bool,

    /// Failures from the feeds that did not load
    #[prop_or_default]
    pub errors: Vec<String>,

    /// Sample data is standing in for the failed feeds
    #[prop_or_default]
    pub fallback: bool,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.loading {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        };
    }

    if props.errors.is_empty() {
        return html! {};
    }

    let headline = if props.fallback {
        "Unable to reach the forecast service. Showing sample data."
    } else {
        "Unable to reach the forecast service."
    };

    html! {
        <div class="status error" role="alert">
            <p class="status-headline">{headline}</p>
            <ul class="status-details">
                { for props.errors.iter().map(|msg| html! { <li>{msg}</li> }) }
            </ul>
        </div>
    }
}
