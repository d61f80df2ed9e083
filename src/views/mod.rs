// ============================================================================
// VIEWS - Funciones que construyen DOM (sin lógica de negocio)
// ============================================================================

pub mod form_fields;
pub mod login;
pub mod dashboard;
pub mod toast;
pub mod app;

pub use login::render_login;
pub use dashboard::render_dashboard;
pub use toast::mount_toast_surface;
pub use app::{render_route, RenderedView};

use crate::services::{ApiClient, BrowserNavigator, LocalTokenStore};
use crate::viewmodels::{ListingViewModel, LoginViewModel};

/// Viewmodels concretos del navegador
pub type LoginVm = LoginViewModel<ApiClient, LocalTokenStore, BrowserNavigator>;
pub type ListingVm = ListingViewModel<ApiClient, BrowserNavigator>;
