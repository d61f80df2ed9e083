// ============================================================================
// VALIDACIÓN DE CAMPOS - Funciones puras
// ============================================================================
// Entrada: el borrador del formulario. Salida: mapa completo de errores.
// Mapa vacío = formulario válido.
// ============================================================================

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Credentials, ErrorKind, ListingDraft, ListingFieldKey, LoginFieldKey, ValidationErrors};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_MODEL_LENGTH: usize = 3;
pub const PHONE_DIGITS: usize = 11;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"\S+@\S+\.\S+").expect("email pattern");
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{11}$").expect("phone pattern");
    static ref DECIMAL_RE: Regex =
        Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$").expect("decimal pattern");
}

/// Validar credenciales de login
pub fn validate_login(credentials: &Credentials) -> ValidationErrors<LoginFieldKey> {
    let mut errors = ValidationErrors::new();

    if credentials.email.is_empty() {
        errors.insert(LoginFieldKey::Email, ErrorKind::Required, "Email is required.");
    } else if !EMAIL_RE.is_match(&credentials.email) {
        errors.insert(LoginFieldKey::Email, ErrorKind::InvalidFormat, "Enter a valid email address.");
    }

    if credentials.password.is_empty() {
        errors.insert(LoginFieldKey::Password, ErrorKind::Required, "Password is required.");
    } else if utf16_len(&credentials.password) < MIN_PASSWORD_LENGTH {
        errors.insert(
            LoginFieldKey::Password,
            ErrorKind::TooShort,
            format!("Password must be at least {} characters.", MIN_PASSWORD_LENGTH),
        );
    }

    errors
}

/// Validar el borrador del anuncio (ciudad, copias e imágenes no se validan)
pub fn validate_listing(draft: &ListingDraft) -> ValidationErrors<ListingFieldKey> {
    let mut errors = ValidationErrors::new();

    if draft.model.is_empty() {
        errors.insert(ListingFieldKey::Model, ErrorKind::Required, "Model is required");
    } else if utf16_len(&draft.model) < MIN_MODEL_LENGTH {
        errors.insert(
            ListingFieldKey::Model,
            ErrorKind::TooShort,
            format!("Model must be at least {} characters long", MIN_MODEL_LENGTH),
        );
    }

    if draft.price.is_empty() {
        errors.insert(ListingFieldKey::Price, ErrorKind::Required, "Price is required");
    } else if !is_numeric(&draft.price) {
        errors.insert(ListingFieldKey::Price, ErrorKind::NotNumeric, "Price must be a number");
    }

    if draft.phone.is_empty() {
        errors.insert(ListingFieldKey::Phone, ErrorKind::Required, "Phone is required");
    } else if !PHONE_RE.is_match(&draft.phone) {
        errors.insert(
            ListingFieldKey::Phone,
            ErrorKind::BadFormat,
            format!("Phone number must be exactly {} digits", PHONE_DIGITS),
        );
    }

    errors
}

/// Longitud como la mide el navegador: unidades UTF-16
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Espacio en blanco de `Number()`: incluye U+FEFF, excluye U+0085
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Acepta lo mismo que la conversión numérica estándar de un navegador:
/// espacios alrededor, signo, decimales, exponente, `Infinity` y literales
/// enteros `0x`/`0o`/`0b` (sin signo). Solo espacios cuenta como cero.
pub fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return true;
    }

    let unsigned = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }

    if unsigned.len() == trimmed.len() {
        if let Some(radix_ok) = radix_literal(trimmed) {
            return radix_ok;
        }
    }

    DECIMAL_RE.is_match(trimmed)
}

/// `Some(valido)` si el texto tiene prefijo de base, `None` si no lo tiene
fn radix_literal(text: &str) -> Option<bool> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}
