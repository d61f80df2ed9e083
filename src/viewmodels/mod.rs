// ============================================================================
// VIEWMODELS - Estado + lógica de cada formulario
// ============================================================================

pub mod validation;
pub mod upload;
pub mod login_viewmodel;
pub mod listing_viewmodel;

pub use upload::UploadOutcome;
pub use login_viewmodel::LoginViewModel;
pub use listing_viewmodel::{DispatchOutcome, ListingEvent, ListingViewModel};
