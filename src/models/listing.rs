use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum City {
    #[default]
    Lahore,
    Karachi,
}

impl City {
    /// En el orden en que se muestran (el primero es el valor por defecto)
    pub const ALL: [City; 2] = [City::Lahore, City::Karachi];

    pub fn as_str(&self) -> &'static str {
        match self {
            City::Lahore => "Lahore",
            City::Karachi => "Karachi",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .iter()
            .copied()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| format!("Unknown city: {}", s))
    }
}

/// Borrador del anuncio. Se serializa con los nombres que espera el backend
/// (`noOfImg`, `images`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ListingDraft {
    pub model: String,
    pub price: String,
    pub phone: String,
    pub city: City,
    #[serde(rename = "noOfImg")]
    pub copy_count: u32,
    #[serde(rename = "images")]
    pub image_paths: Vec<String>,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            model: String::new(),
            price: String::new(),
            phone: String::new(),
            city: City::default(),
            copy_count: 1,
            image_paths: Vec::new(),
        }
    }
}

/// Cambio de un campo editable del anuncio
#[derive(Clone, PartialEq, Debug)]
pub enum ListingField {
    Model(String),
    Price(String),
    Phone(String),
    City(City),
    CopyCount(u32),
}

/// Claves del mapa de errores del anuncio
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ListingFieldKey {
    Model,
    Price,
    Phone,
}

impl ListingFieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingFieldKey::Model => "model",
            ListingFieldKey::Price => "price",
            ListingFieldKey::Phone => "phone",
        }
    }
}

impl ListingDraft {
    pub fn apply(&mut self, change: ListingField) {
        match change {
            ListingField::Model(value) => self.model = value,
            ListingField::Price(value) => self.price = value,
            ListingField::Phone(value) => self.phone = value,
            ListingField::City(city) => self.city = city,
            ListingField::CopyCount(count) => self.copy_count = count,
        }
    }
}

/// Respuesta de `POST /api/add-car`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AddCarResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Respuesta de `POST /api/upload-image`: `{ data: { paths: [...] } }`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    #[serde(default)]
    pub data: Option<UploadData>,
}

#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadData {
    #[serde(default)]
    pub paths: Option<Vec<String>>,
}

impl UploadResponse {
    pub fn with_paths(paths: Vec<String>) -> Self {
        Self { data: Some(UploadData { paths: Some(paths) }) }
    }

    /// Rutas asignadas por el servidor; `None` si faltan `data` o `paths`
    pub fn into_paths(self) -> Option<Vec<String>> {
        self.data.and_then(|data| data.paths)
    }
}
