use serde::{Deserialize, Serialize};

/// Datos del formulario de login (también es el body de `POST /api/login`)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Cambio de un campo del formulario de login
#[derive(Clone, PartialEq, Debug)]
pub enum LoginField {
    Email(String),
    Password(String),
}

/// Claves del mapa de errores del login
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum LoginFieldKey {
    Email,
    Password,
}

impl LoginFieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginFieldKey::Email => "email",
            LoginFieldKey::Password => "password",
        }
    }
}

impl Credentials {
    /// Reemplaza el campo indicado
    pub fn apply(&mut self, change: LoginField) {
        match change {
            LoginField::Email(value) => self.email = value,
            LoginField::Password(value) => self.password = value,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginUser {
    pub email: String,
}

/// Respuesta de `POST /api/login`. `status` es obligatorio: sin él la
/// respuesta no deserializa y se trata como mal formada.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub status: bool,
    #[serde(default)]
    pub user: Option<LoginUser>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token a persistir (el email del usuario), si la respuesta lo trae
    pub fn session_token(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.email.as_str())
            .filter(|email| !email.is_empty())
    }
}
