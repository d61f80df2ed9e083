// ============================================================================
// TEST SUPPORT - Dobles en memoria para probar viewmodels sin navegador
// ============================================================================

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::error::{ApiError, ApiResult};
use crate::models::{
    AddCarResponse, City, Credentials, ListingDraft, LoginResponse, LoginUser, NotificationEvent, UploadResponse,
};
use crate::services::{CarListingApi, NotificationChannel, SelectedFile, TokenStore};
use crate::state::{Navigator, Route};

/// Cede el control una vez al ejecutor (simula la espera de red)
pub async fn yield_once() {
    YieldOnce(false).await
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeFile {
    pub name: String,
    pub mime: String,
}

impl FakeFile {
    pub fn image(name: &str) -> Self {
        Self { name: name.into(), mime: "image/png".into() }
    }

    pub fn other(name: &str, mime: &str) -> Self {
        Self { name: name.into(), mime: mime.into() }
    }
}

impl SelectedFile for FakeFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

/// Backend falso con respuestas configurables y contadores de llamadas
pub struct FakeApi {
    pub login_response: RefCell<ApiResult<LoginResponse>>,
    pub add_car_response: RefCell<ApiResult<AddCarResponse>>,
    pub upload_response: RefCell<ApiResult<UploadResponse>>,
    pub login_calls: Cell<usize>,
    pub add_car_calls: Cell<usize>,
    pub upload_calls: Cell<usize>,
    pub last_listing: RefCell<Option<ListingDraft>>,
    pub last_upload: RefCell<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login_response: RefCell::new(Ok(LoginResponse {
                status: true,
                user: Some(LoginUser { email: "ali@cars.pk".into() }),
                message: None,
            })),
            add_car_response: RefCell::new(Ok(AddCarResponse { ok: true, message: None })),
            upload_response: RefCell::new(Ok(UploadResponse::with_paths(Vec::new()))),
            login_calls: Cell::new(0),
            add_car_calls: Cell::new(0),
            upload_calls: Cell::new(0),
            last_listing: RefCell::new(None),
            last_upload: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn failing_with(err: ApiError) -> Self {
        let api = Self::default();
        *api.login_response.borrow_mut() = Err(err.clone());
        *api.add_car_response.borrow_mut() = Err(err.clone());
        *api.upload_response.borrow_mut() = Err(err);
        api
    }
}

impl CarListingApi for FakeApi {
    type File = FakeFile;

    async fn login(&self, _credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.login_calls.set(self.login_calls.get() + 1);
        yield_once().await;
        self.login_response.borrow().clone()
    }

    async fn add_car(&self, draft: &ListingDraft) -> ApiResult<AddCarResponse> {
        self.add_car_calls.set(self.add_car_calls.get() + 1);
        *self.last_listing.borrow_mut() = Some(draft.clone());
        yield_once().await;
        self.add_car_response.borrow().clone()
    }

    async fn upload_images(&self, files: &[FakeFile]) -> ApiResult<UploadResponse> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        *self.last_upload.borrow_mut() = files.iter().map(SelectedFile::file_name).collect();
        yield_once().await;
        self.upload_response.borrow().clone()
    }
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
    pub fail_writes: Cell<bool>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.into())), fail_writes: Cell::new(false) }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn read_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write_token(&self, token: &str) -> ApiResult<()> {
        if self.fail_writes.get() {
            return Err(ApiError::Storage("quota exceeded".into()));
        }
        *self.token.borrow_mut() = Some(token.into());
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavKind {
    Push,
    Replace,
}

#[derive(Default)]
pub struct RecordingNavigator {
    entries: RefCell<Vec<(NavKind, Route)>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<(NavKind, Route)> {
        self.entries.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.entries.borrow_mut().push((NavKind::Push, route));
    }

    fn replace(&self, route: Route) {
        self.entries.borrow_mut().push((NavKind::Replace, route));
    }
}

/// Canal con una superficie que guarda todo lo publicado
pub fn recording_channel() -> (NotificationChannel, Rc<RefCell<Vec<NotificationEvent>>>) {
    let channel = NotificationChannel::new(3000);
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let events = events.clone();
        channel.attach(move |event| events.borrow_mut().push(event));
    }
    (channel, events)
}

pub fn civic_draft() -> ListingDraft {
    ListingDraft {
        model: "Civic".into(),
        price: "1500000".into(),
        phone: "03001234567".into(),
        city: City::Lahore,
        copy_count: 1,
        image_paths: Vec::new(),
    }
}
