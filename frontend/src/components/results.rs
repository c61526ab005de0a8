use yew::prelude::*;

use crate::Model;

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    html! {
        <div class="results-container">
            <h2>{"Results:"}</h2>
            <p>{ format!("Detected Animal: {}", result.animal) }</p>
            <p>{ format!("Confidence: {:.2}%", result.confidence * 100.0) }</p>
            <div class="analysis-text">
                <p>{ &result.analysis }</p>
                {
                    if let Some(url) = &result.wikipedia_url {
                        html! {
                            <p class="wikipedia-link">
                                <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                                    {"Read more on Wikipedia →"}
                                </a>
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
