// ============================================================================
// LISTING VIEWMODEL - FORMULARIO DEL DASHBOARD (anuncio + imágenes)
// ============================================================================
// Todos los eventos de la vista entran por `dispatch(ListingEvent)`.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::models::{AddCarResponse, ListingDraft, ListingField, ListingFieldKey};
use crate::services::{CarListingApi, NotificationChannel};
use crate::state::{FormState, Navigator, Route, SubmitBlocked, SubmitOutcome};
use crate::viewmodels::upload::{limit_message, SelectionDecision, UploadCoordinator, UploadOutcome};
use crate::viewmodels::validation::validate_listing;

const REJECTED_LISTING: &str = "The listing could not be created";

/// Eventos del formulario de anuncio
#[derive(Debug)]
pub enum ListingEvent<F> {
    FieldChanged(ListingField),
    FilesSelected(Vec<F>),
    Submit,
}

/// Lo que hizo `dispatch` con el evento
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DispatchOutcome {
    /// `false` si el campo no se pudo editar (envío en curso)
    Field(bool),
    Upload(UploadOutcome),
    Submit(SubmitOutcome),
}

pub struct ListingViewModel<A, N> {
    form: FormState<ListingDraft, ListingFieldKey>,
    uploads: UploadCoordinator,
    api: Rc<A>,
    navigator: N,
    notifier: NotificationChannel,
}

impl<A, N> ListingViewModel<A, N>
where
    A: CarListingApi,
    N: Navigator,
{
    pub fn new(api: Rc<A>, navigator: N, notifier: NotificationChannel) -> Self {
        Self {
            form: FormState::new(ListingDraft::default()),
            uploads: UploadCoordinator::new(),
            api,
            navigator,
            notifier,
        }
    }

    pub fn form(&self) -> &FormState<ListingDraft, ListingFieldKey> {
        &self.form
    }

    pub fn uploads(&self) -> &UploadCoordinator {
        &self.uploads
    }

    pub async fn dispatch(&self, event: ListingEvent<A::File>) -> DispatchOutcome {
        match event {
            ListingEvent::FieldChanged(change) => DispatchOutcome::Field(self.field_changed(change)),
            ListingEvent::FilesSelected(files) => DispatchOutcome::Upload(self.select_files(files).await),
            ListingEvent::Submit => DispatchOutcome::Submit(self.submit().await),
        }
    }

    pub fn field_changed(&self, change: ListingField) -> bool {
        self.form.edit(|draft| draft.apply(change))
    }

    /// Aplica el límite de copias y sube la selección. Las rutas devueltas
    /// reemplazan a las anteriores.
    pub async fn select_files(&self, files: Vec<A::File>) -> UploadOutcome {
        if self.uploads.is_uploading() {
            log::debug!("⏳ [UPLOAD] Selección ignorada, subida en curso");
            return UploadOutcome::Ignored;
        }

        let limit = self.form.with_draft(|draft| draft.copy_count);
        let files = match self.uploads.gate(limit, files) {
            SelectionDecision::Accepted(files) => files,
            SelectionDecision::Empty => return UploadOutcome::Ignored,
            SelectionDecision::Rejected { limit, .. } => {
                self.notifier.warn("Too many images", limit_message(limit));
                return UploadOutcome::Rejected;
            }
        };

        if !self.uploads.begin() {
            return UploadOutcome::Ignored;
        }
        log::info!("📤 [UPLOAD] Subiendo {} imagen(es)", files.len());
        let result = self.api.upload_images(&files).await;
        self.uploads.finish();

        if !self.form.is_mounted() {
            log::debug!("🗑️ [UPLOAD] Respuesta descartada, vista desmontada");
            return UploadOutcome::Stale;
        }

        let paths = result.and_then(|response| {
            response
                .into_paths()
                .ok_or_else(|| ApiError::MalformedResponse("upload response without data.paths".into()))
        });

        match paths {
            Ok(paths) => {
                let count = paths.len();
                log::info!("✅ [UPLOAD] {} ruta(s) recibidas", count);
                self.form.merge(|draft| draft.image_paths = paths);
                self.notifier.info("Images uploaded", format!("{} image(s) attached", count));
                UploadOutcome::Uploaded(count)
            }
            Err(err) => {
                self.notifier.report(&err);
                UploadOutcome::Failed
            }
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let draft = match self.form.begin_submit(validate_listing) {
            Ok(draft) => draft,
            Err(SubmitBlocked::Busy(phase)) => {
                log::debug!("⏳ [DASHBOARD] Envío ignorado en fase {:?}", phase);
                return SubmitOutcome::Busy;
            }
            Err(SubmitBlocked::Invalid(errors)) => {
                log::info!("📝 [DASHBOARD] {} campo(s) con errores", errors.len());
                return SubmitOutcome::Invalid;
            }
        };

        log::info!("🚗 [DASHBOARD] Publicando anuncio: {} ({})", draft.model, draft.city);
        let result = self.api.add_car(&draft).await;

        if !self.form.is_mounted() {
            log::debug!("🗑️ [DASHBOARD] Respuesta descartada, vista desmontada");
            return SubmitOutcome::Stale;
        }

        match accept_listing(result) {
            Ok(()) => {
                self.form.finish_submit(true);
                log::info!("✅ [DASHBOARD] Anuncio publicado");
                self.notifier.success("Listing created", format!("{} is now listed", draft.model));
                self.navigator.navigate(Route::HOME);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.form.finish_submit(false);
                self.notifier.report(&err);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn unmount(&self) {
        self.form.unmount();
    }
}

fn accept_listing(result: ApiResult<AddCarResponse>) -> ApiResult<()> {
    let response = result?;
    if response.ok {
        Ok(())
    } else {
        Err(ApiError::Rejected(
            response.message.unwrap_or_else(|| REJECTED_LISTING.to_string()),
        ))
    }
}
