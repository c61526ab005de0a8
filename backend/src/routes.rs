use actix_files::Files;
use actix_web::{HttpResponse, web};
use shared::{AnalyzeRequest, ClassifyRequest};

use crate::analysis::AnalysisService;
use crate::classifier::ClassifierService;
use crate::error::ApiError;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/classify").route(web::post().to(handle_classify)))
        .service(web::resource("/api/analyze").route(web::post().to(handle_analyze)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn handle_classify(
    classifier: web::Data<ClassifierService>,
    request: web::Json<ClassifyRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = classifier.classify(&request.image).await.map_err(|e| {
        log::error!("Classification failed: {e}");
        e
    })?;
    Ok(HttpResponse::Ok().json(result))
}

async fn handle_analyze(
    analysis: web::Data<AnalysisService>,
    request: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = analysis.analyze(&request.animal).await.map_err(|e| {
        log::error!("Analysis failed: {e}");
        e
    })?;
    Ok(HttpResponse::Ok().json(result))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use shared::{AnalyzeResponse, ErrorBody};

    use super::*;
    use crate::config::ApiConfig;

    macro_rules! unconfigured_app {
        () => {{
            let config = ApiConfig::unconfigured();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(ClassifierService::new(config.clone())))
                    .app_data(web::Data::new(AnalysisService::new(config)))
                    .service(web::resource("/api/classify").route(web::post().to(handle_classify)))
                    .service(web::resource("/api/analyze").route(web::post().to(handle_analyze))),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn classify_without_credential_returns_500_with_message() {
        let app = unconfigured_app!();
        let request = test::TestRequest::post()
            .uri("/api/classify")
            .set_json(ClassifyRequest {
                image: "data:image/jpeg;base64,aGVsbG8=".into(),
            })
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(body.message, "Hugging Face API key is not configured");
    }

    #[actix_web::test]
    async fn analyze_rabbit_succeeds_without_credentials() {
        let app = unconfigured_app!();
        let request = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(AnalyzeRequest {
                animal: "jackrabbit".into(),
            })
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: AnalyzeResponse = test::read_body_json(response).await;
        assert!(body.analysis.contains("Caerbannog"));
        assert_eq!(
            body.wikipedia_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Rabbit_of_Caerbannog")
        );
    }

    #[actix_web::test]
    async fn analyze_without_credential_returns_500_with_message() {
        let app = unconfigured_app!();
        let request = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(AnalyzeRequest {
                animal: "lion".into(),
            })
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = test::read_body_json(response).await;
        assert_eq!(body.message, "OpenAI API key is not configured");
    }
}
