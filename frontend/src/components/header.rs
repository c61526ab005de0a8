use yew::prelude::*;

pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-paw"></i> {" Animal Identifier"}</h1>
            <p class="subtitle">{"Upload a JPG photo to identify the animal and learn if it is dangerous"}</p>
        </header>
    }
}
