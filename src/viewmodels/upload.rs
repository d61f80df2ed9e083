// ============================================================================
// UPLOAD COORDINATOR - Límite de archivos antes de subir
// ============================================================================
// Una sola subida en vuelo por formulario. El mensaje de límite es estado
// de la vista (no un error de campo).
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::services::SelectedFile;
use crate::state::ReactiveState;

/// Resultado de filtrar una selección nueva
#[derive(Debug, PartialEq)]
pub enum SelectionDecision<F> {
    /// Se puede subir (nunca vacío)
    Accepted(Vec<F>),
    /// Más archivos que copias permitidas: la selección entera se descarta
    Rejected { limit: u32, selected: usize },
    /// Nada que subir
    Empty,
}

/// Resultado observable de una selección de archivos
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadOutcome {
    Uploaded(usize),
    Rejected,
    /// Selección vacía o subida anterior aún en vuelo
    Ignored,
    Failed,
    Stale,
}

pub fn limit_message(limit: u32) -> String {
    format!("You can only upload a maximum of {} files.", limit)
}

#[derive(Clone, Default)]
pub struct UploadCoordinator {
    message: ReactiveState<Option<String>>,
    in_flight: Rc<Cell<bool>>,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mensaje visible bajo el input de archivos
    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    pub fn subscribe_message(&self, callback: impl Fn() + 'static) {
        self.message.subscribe(callback);
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.get()
    }

    /// Filtra a imágenes y aplica el límite `limit` sobre lo que queda
    pub fn gate<F: SelectedFile>(&self, limit: u32, files: Vec<F>) -> SelectionDecision<F> {
        let total = files.len();
        let images: Vec<F> = files.into_iter().filter(|f| f.is_image()).collect();
        if images.len() < total {
            log::warn!("🖼️ [UPLOAD] {} archivo(s) descartados por no ser imágenes", total - images.len());
        }

        if images.len() > limit as usize {
            log::warn!("🚫 [UPLOAD] {} archivos seleccionados, máximo {}", images.len(), limit);
            self.message.set(Some(limit_message(limit)));
            return SelectionDecision::Rejected { limit, selected: images.len() };
        }

        self.message.set(None);
        if images.is_empty() {
            SelectionDecision::Empty
        } else {
            SelectionDecision::Accepted(images)
        }
    }

    /// Marca la subida como iniciada. `false` si ya había una en vuelo.
    pub fn begin(&self) -> bool {
        !self.in_flight.replace(true)
    }

    pub fn finish(&self) {
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeFile;

    fn images(names: &[&str]) -> Vec<FakeFile> {
        names.iter().map(|n| FakeFile::image(n)).collect()
    }

    #[test]
    fn too_many_files_are_rejected_with_message() {
        let uploads = UploadCoordinator::new();
        let decision = uploads.gate(2, images(&["a.png", "b.png", "c.png"]));

        assert_eq!(decision, SelectionDecision::Rejected { limit: 2, selected: 3 });
        let message = uploads.message().unwrap();
        assert!(message.contains('2'));
        assert_eq!(message, "You can only upload a maximum of 2 files.");
    }

    #[test]
    fn valid_selection_clears_previous_message() {
        let uploads = UploadCoordinator::new();
        let _ = uploads.gate(1, images(&["a.png", "b.png"]));
        assert!(uploads.message().is_some());

        let decision = uploads.gate(2, images(&["a.png", "b.png"]));
        assert_eq!(decision, SelectionDecision::Accepted(images(&["a.png", "b.png"])));
        assert!(uploads.message().is_none());
    }

    #[test]
    fn non_images_are_dropped_before_counting() {
        let uploads = UploadCoordinator::new();
        let files = vec![
            FakeFile::image("a.png"),
            FakeFile::other("notes.pdf", "application/pdf"),
            FakeFile::other("song.mp3", "audio/mpeg"),
        ];
        assert_eq!(uploads.gate(1, files), SelectionDecision::Accepted(images(&["a.png"])));
    }

    #[test]
    fn empty_selection_is_empty() {
        let uploads = UploadCoordinator::new();
        assert_eq!(uploads.gate::<FakeFile>(3, Vec::new()), SelectionDecision::Empty);
        assert_eq!(
            uploads.gate(3, vec![FakeFile::other("x.txt", "text/plain")]),
            SelectionDecision::Empty
        );
    }

    #[test]
    fn only_one_upload_in_flight() {
        let uploads = UploadCoordinator::new();
        assert!(uploads.begin());
        assert!(!uploads.begin());
        assert!(uploads.is_uploading());
        uploads.finish();
        assert!(uploads.begin());
    }
}
