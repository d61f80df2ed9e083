// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod form_state;
pub mod route;
pub mod app_state;

pub use reactivity::*;
pub use form_state::*;
pub use route::*;
pub use app_state::*;
