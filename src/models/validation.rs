use std::collections::BTreeMap;

/// Tipo de fallo de validación de un campo
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    TooShort,
    NotNumeric,
    BadFormat,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Mapa campo -> error. Un campo ausente no tiene error activo.
/// Se recalcula entero en cada validación, nunca se mezcla con el anterior.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidationErrors<F: Ord> {
    entries: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, kind: ErrorKind, message: impl Into<String>) {
        self.entries.insert(field, FieldError { kind, message: message.into() });
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    pub fn message(&self, field: F) -> Option<&str> {
        self.get(field).map(|err| err.message.as_str())
    }

    pub fn kind(&self, field: F) -> Option<ErrorKind> {
        self.get(field).map(|err| err.kind)
    }

    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
