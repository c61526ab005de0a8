mod components;

use gloo_file::callbacks::FileReader;
use gloo_file::{File as GlooFile, ObjectUrl, callbacks};
use gloo_net::http::Request;
use shared::{AnalyzeRequest, AnalyzeResponse, ClassifyRequest, ClassifyResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Merged output of the classify and analyze calls, shown to the user.
#[derive(Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub animal: String,
    pub confidence: f32,
    pub analysis: String,
    pub wikipedia_url: Option<String>,
}

pub enum Msg {
    // File operations
    FileSelected(GlooFile),
    FileRejected(String),

    // Pipeline stages
    Upload,
    ImageEncoded(String),
    PipelineComplete(AnalysisOutcome),

    // UI states
    SetError(Option<String>),
}

/// Idle -> ImageSelected -> Uploading -> Result | Error, one upload in flight
/// at a time.
pub struct Model {
    pub selected_file: Option<GlooFile>,
    pub preview_url: Option<ObjectUrl>,
    pub result: Option<AnalysisOutcome>,
    pub loading: bool,
    pub error: Option<String>,
    // Keeps the in-progress file read alive; dropping it aborts the read.
    reader: Option<FileReader>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected_file: None,
            preview_url: None,
            result: None,
            loading: false,
            error: None,
            reader: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => self.handle_file_selected(file),
            Msg::FileRejected(message) => {
                self.error = Some(message);
                true
            }
            Msg::Upload => self.handle_upload(ctx),
            Msg::ImageEncoded(data_url) => self.handle_image_encoded(ctx, data_url),
            Msg::PipelineComplete(outcome) => {
                self.result = Some(outcome);
                self.loading = false;
                self.reader = None;
                true
            }
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                self.reader = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::render_header() }

                <main class="main-content">
                    { components::render_upload_section(self, ctx) }
                    { components::render_error_message(self) }
                    { components::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Animal Identifier | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn handle_file_selected(&mut self, file: GlooFile) -> bool {
        self.preview_url = Some(ObjectUrl::from(file.clone()));
        self.selected_file = Some(file);
        self.result = None;
        self.error = None;
        true
    }

    fn handle_upload(&mut self, ctx: &Context<Self>) -> bool {
        let Some(file) = self.selected_file.clone() else {
            self.error = Some("No image selected.".into());
            return true;
        };

        self.loading = true;
        self.result = None;
        self.error = None;

        let link = ctx.link().clone();
        self.reader = Some(callbacks::read_as_data_url(&file, move |result| {
            match result {
                Ok(data_url) => link.send_message(Msg::ImageEncoded(data_url)),
                Err(e) => link.send_message(Msg::SetError(Some(format!(
                    "An error occurred while reading the image: {}",
                    e
                )))),
            }
        }));

        true
    }

    fn handle_image_encoded(&mut self, ctx: &Context<Self>, data_url: String) -> bool {
        let link = ctx.link().clone();

        spawn_local(async move {
            match run_pipeline(data_url).await {
                Ok(Some(outcome)) => link.send_message(Msg::PipelineComplete(outcome)),
                Ok(None) => link.send_message(Msg::SetError(Some(
                    "No supported animal detected in the image".into(),
                ))),
                Err(message) => link.send_message(Msg::SetError(Some(message))),
            }
        });

        false
    }
}

/// Classifies the encoded image, then asks for a danger analysis of the
/// detected animal. `Ok(None)` means classification found no supported animal
/// and the analysis stage was skipped.
async fn run_pipeline(data_url: String) -> Result<Option<AnalysisOutcome>, String> {
    let classification: ClassifyResponse =
        post_json("/api/classify", &ClassifyRequest { image: data_url }).await?;

    let Some(animal) = classification.animal else {
        return Ok(None);
    };

    let analysis: AnalyzeResponse = post_json(
        "/api/analyze",
        &AnalyzeRequest {
            animal: animal.clone(),
        },
    )
    .await?;

    Ok(Some(AnalysisOutcome {
        animal,
        confidence: classification.confidence.unwrap_or(0.0),
        analysis: analysis.analysis,
        wikipedia_url: analysis.wikipedia_url,
    }))
}

async fn post_json<B, R>(url: &str, body: &B) -> Result<R, String>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let request = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {} - {}", status, body));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
