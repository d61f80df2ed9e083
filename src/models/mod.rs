pub mod auth;
pub mod listing;
pub mod notification;
pub mod validation;

pub use auth::{Credentials, LoginField, LoginFieldKey, LoginResponse, LoginUser};
pub use listing::{AddCarResponse, City, ListingDraft, ListingField, ListingFieldKey, UploadData, UploadResponse};
pub use notification::{NotificationEvent, Severity};
pub use validation::{ErrorKind, FieldError, ValidationErrors};
