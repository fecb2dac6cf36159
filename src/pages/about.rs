use yew::prelude::*;

const DATA_SOURCES: [&str; 4] = [
    "Historical IESO hourly demand data spanning multiple years",
    "Weather data including temperature, humidity, and forecasts",
    "Calendar features such as day of week, holidays, and seasonal patterns",
    "Real-time supply mix information from various energy sources",
];

const PREPROCESSING: [&str; 4] = [
    "Handling missing values through interpolation and forward-filling",
    "Feature engineering to create time-based and lag features",
    "Normalization and scaling of numerical features",
    "Outlier detection and treatment to improve prediction stability",
];

const METRICS: [(&str, &str); 3] = [
    ("Mean Absolute Error (MAE)", "~150 MW"),
    ("Root Mean Square Error (RMSE)", "~220 MW"),
    ("Mean Absolute Percentage Error (MAPE)", "~1.2%"),
];

const PIPELINE: [(&str, &str); 5] = [
    ("Data Fetching", "Hourly retrieval of IESO data and weather forecasts"),
    ("Preprocessing", "Feature engineering and data normalization"),
    ("Model Inference", "Generate 24-hour demand predictions"),
    ("Validation", "Compare predictions with actual demand for accuracy tracking"),
    ("Visualization", "Dashboard updates with the latest forecasts"),
];

const IMPROVEMENTS: [&str; 5] = [
    "Renewable generation forecasts for solar and wind",
    "Temperature-based demand refinements for extreme weather",
    "Ensemble modelling for better peak accuracy",
    "Grid congestion data for load distribution",
    "Forecast horizon extended from 24 to 72 hours",
];

fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="about-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="app-main about-page">
            <section class="card about-card">
                <h1>{"About the Model"}</h1>
                <p>
                    {"The model predicts Ontario's hourly electricity demand for the next 24 hours \
                      from historical consumption, weather conditions and calendar features."}
                </p>
            </section>

            <section class="card about-card">
                <h2>{"Data Collection"}</h2>
                {bullet_list(&DATA_SOURCES)}
            </section>

            <section class="card about-card">
                <h2>{"Data Processing"}</h2>
                {bullet_list(&PREPROCESSING)}
            </section>

            <section class="card about-card">
                <h2>{"Model Training"}</h2>
                <div class="about-metrics">
                    <p><strong>{"Primary Model: "}</strong>{"XGBoost Gradient Boosting"}</p>
                    <ul class="about-list">
                        {
                            for METRICS.iter().map(|(name, value)| html! {
                                <li>{format!("{name}: {value}")}</li>
                            })
                        }
                    </ul>
                </div>
                <p>{"The model is retrained weekly on the latest data."}</p>
            </section>

            <section class="card about-card">
                <h2>{"Pipeline"}</h2>
                <ol class="pipeline">
                    {
                        for PIPELINE.iter().enumerate().map(|(i, (title, desc))| html! {
                            <li class="pipeline-step">
                                <span class="pipeline-number">{i + 1}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p class="card-subtitle">{*desc}</p>
                                </div>
                            </li>
                        })
                    }
                </ol>
            </section>

            <section class="card about-card">
                <h2>{"Future Improvements"}</h2>
                {bullet_list(&IMPROVEMENTS)}
            </section>
        </main>
    }
}
