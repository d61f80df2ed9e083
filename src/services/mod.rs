pub mod api_client;
pub mod navigation_service;
pub mod notification_service;
pub mod session_service;

pub use api_client::*;
pub use navigation_service::*;
pub use notification_service::*;
pub use session_service::*;
