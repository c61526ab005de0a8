use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{Model, Msg};

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));
        input.set_value("");

        match file {
            Some(file) => {
                let mime_type = file.type_();
                if mime_type.contains("jpeg") || mime_type.contains("jpg") {
                    Msg::FileSelected(GlooFile::from(file))
                } else {
                    Msg::FileRejected("Please upload only JPG/JPEG images".into())
                }
            }
            None => Msg::SetError(None),
        }
    });

    let handle_upload = link.callback(|_: MouseEvent| Msg::Upload);

    html! {
        <div class="upload-section">
            <label class="upload-label" for="file-input">
                {"Upload Animal Image (JPG/JPEG only)"}
            </label>
            <input
                type="file"
                id="file-input"
                accept=".jpg,.jpeg"
                onchange={handle_change}
            />

            { render_preview(model) }

            <button
                class="analyze-btn"
                onclick={handle_upload}
                disabled={model.loading || model.selected_file.is_none()}
            >
                { if model.loading {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Processing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Image"}</> }
                }}
            </button>
        </div>
    }
}

fn render_preview(model: &Model) -> Html {
    if let Some(url) = &model.preview_url {
        html! {
            <img
                id="image-preview"
                src={url.to_string()}
                alt="Image Preview"
                style="max-width: 100%; max-height: 400px; object-fit: contain; margin: 10px 0;"
            />
        }
    } else {
        html! {}
    }
}
