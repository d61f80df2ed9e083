// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. Los viewmodels dependen
// del trait `CarListingApi`, no de esta implementación.
// ============================================================================

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::models::{AddCarResponse, Credentials, ListingDraft, LoginResponse, UploadResponse};

pub const LOGIN_PATH: &str = "/api/login";
pub const ADD_CAR_PATH: &str = "/api/add-car";
pub const UPLOAD_IMAGE_PATH: &str = "/api/upload-image";
/// Nombre del campo multipart de las imágenes
pub const UPLOAD_FIELD: &str = "images";

/// Archivo elegido por el usuario
pub trait SelectedFile {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}

impl SelectedFile for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Backend de anuncios
#[allow(async_fn_in_trait)]
pub trait CarListingApi {
    type File: SelectedFile;

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;
    async fn add_car(&self, draft: &ListingDraft) -> ApiResult<AddCarResponse>;
    async fn upload_images(&self, files: &[Self::File]) -> ApiResult<UploadResponse>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: Option<u32>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            timeout_ms: CONFIG.network_timeout_ms(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Envía la petición, con carrera contra el timeout si está configurado
    async fn send(&self, request: Request) -> ApiResult<Response> {
        let send = Box::pin(request.send());
        let result = match self.timeout_ms {
            None => send.await,
            Some(ms) => match future::select(send, Box::pin(TimeoutFuture::new(ms))).await {
                Either::Left((result, _)) => result,
                Either::Right(_) => {
                    log::warn!("⏰ [API] Timeout tras {} ms", ms);
                    return Err(ApiError::Timeout(ms));
                }
            },
        };
        result.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Status no-2xx -> `Http`, body ilegible -> `Parse`
    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        if !response.ok() {
            let status = response.status();
            let message = match response.text().await {
                Ok(text) if !text.is_empty() => text,
                _ => response.status_text(),
            };
            return Err(ApiError::Http { status, message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CarListingApi for ApiClient {
    type File = File;

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        log::info!("🔐 [API] POST {} ({})", LOGIN_PATH, credentials.email);

        let request = Request::post(&self.url(LOGIN_PATH))
            .json(credentials)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    async fn add_car(&self, draft: &ListingDraft) -> ApiResult<AddCarResponse> {
        log::info!("🚗 [API] POST {} ({}, {})", ADD_CAR_PATH, draft.model, draft.city);

        let request = Request::post(&self.url(ADD_CAR_PATH))
            .json(draft)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = self.send(request).await?;
        Self::read_json(response).await
    }

    async fn upload_images(&self, files: &[File]) -> ApiResult<UploadResponse> {
        log::info!("📤 [API] POST {} ({} archivos)", UPLOAD_IMAGE_PATH, files.len());

        let form = FormData::new().map_err(js_error)?;
        for file in files {
            form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.file_name())
                .map_err(js_error)?;
        }

        let request = Request::post(&self.url(UPLOAD_IMAGE_PATH))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = self.send(request).await?;
        Self::read_json(response).await
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn response(status: u16, status_text: &str, body: Option<&str>) -> Response {
        Response::builder().status(status).status_text(status_text).body(body).unwrap()
    }

    #[wasm_bindgen_test]
    async fn slow_backend_times_out() {
        // 10.255.255.1 no es enrutable: la conexión nunca responde
        let client = ApiClient { base_url: "http://10.255.255.1".into(), timeout_ms: Some(1) };
        let credentials = Credentials { email: "ali@cars.pk".into(), password: "secret".into() };

        assert_eq!(client.login(&credentials).await.unwrap_err(), ApiError::Timeout(1));
    }

    #[wasm_bindgen_test]
    async fn non_2xx_maps_to_http_with_body() {
        let err = ApiClient::read_json::<LoginResponse>(response(500, "Internal Server Error", Some("boom"))).await.unwrap_err();
        assert_eq!(err, ApiError::Http { status: 500, message: "boom".into() });
    }

    #[wasm_bindgen_test]
    async fn empty_error_body_falls_back_to_status_text() {
        let err = ApiClient::read_json::<UploadResponse>(response(413, "Payload Too Large", None)).await.unwrap_err();
        assert_eq!(err, ApiError::Http { status: 413, message: "Payload Too Large".into() });
    }

    #[wasm_bindgen_test]
    async fn unreadable_body_maps_to_parse() {
        let err = ApiClient::read_json::<LoginResponse>(response(200, "OK", Some("<html>"))).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)), "{:?}", err);
    }

    #[wasm_bindgen_test]
    async fn ok_body_is_decoded() {
        let body = r#"{"status":true,"user":{"email":"ali@cars.pk"}}"#;
        let login = ApiClient::read_json::<LoginResponse>(response(200, "OK", Some(body))).await.unwrap();
        assert!(login.status);
        assert_eq!(login.user.map(|u| u.email).as_deref(), Some("ali@cars.pk"));
    }
}
