// ============================================================================
// FORM STATE - Máquina de estados de un formulario
// ============================================================================
// Editing -> Submitting -> Succeeded | Editing
// Un solo envío en vuelo por formulario. Las respuestas que llegan después de
// desmontar la vista se descartan.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::ValidationErrors;
use crate::state::ReactiveState;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
}

/// Resultado observable de un `submit()`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// Errores de campo, no hubo petición
    Invalid,
    /// Ya había un envío en vuelo (o el formulario terminó), no hubo petición
    Busy,
    Succeeded,
    /// Error de red o de negocio, de vuelta a `Editing`
    Failed,
    /// La respuesta llegó con la vista desmontada y se descartó
    Stale,
}

/// Motivo por el que `begin_submit` no arrancó el envío
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitBlocked<F: Ord> {
    /// El formulario no está en `Editing`
    Busy(FormPhase),
    Invalid(ValidationErrors<F>),
}

pub struct FormState<D, F: Ord> {
    draft: Rc<RefCell<D>>,
    errors: ReactiveState<ValidationErrors<F>>,
    phase: ReactiveState<FormPhase>,
    mounted: Rc<Cell<bool>>,
}

impl<D, F: Ord> Clone for FormState<D, F> {
    fn clone(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            phase: self.phase.clone(),
            mounted: self.mounted.clone(),
        }
    }
}

impl<D: Clone, F: Ord + Copy> FormState<D, F> {
    pub fn new(draft: D) -> Self {
        Self {
            draft: Rc::new(RefCell::new(draft)),
            errors: ReactiveState::new(ValidationErrors::new()),
            phase: ReactiveState::new(FormPhase::Editing),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    pub fn draft(&self) -> D {
        self.draft.borrow().clone()
    }

    pub fn with_draft<R>(&self, reader: impl FnOnce(&D) -> R) -> R {
        reader(&*self.draft.borrow())
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    /// Solo en `Editing` se aceptan cambios del usuario
    pub fn is_editable(&self) -> bool {
        self.phase() == FormPhase::Editing
    }

    pub fn errors(&self) -> ValidationErrors<F> {
        self.errors.get()
    }

    /// Cambio de campo por el usuario. Solo en `Editing`; no toca los errores.
    pub fn edit(&self, change: impl FnOnce(&mut D)) -> bool {
        if !self.is_editable() {
            return false;
        }
        change(&mut *self.draft.borrow_mut());
        true
    }

    /// Mezcla de datos que no vienen del usuario (p.ej. rutas de imágenes
    /// subidas). No depende de la fase.
    pub fn merge(&self, change: impl FnOnce(&mut D)) {
        change(&mut *self.draft.borrow_mut());
    }

    /// Valida y, si todo está bien, pasa a `Submitting` y devuelve la copia del
    /// borrador a enviar. El mapa de errores se reemplaza entero.
    pub fn begin_submit(
        &self,
        validate: impl FnOnce(&D) -> ValidationErrors<F>,
    ) -> Result<D, SubmitBlocked<F>> {
        let phase = self.phase();
        if phase != FormPhase::Editing {
            return Err(SubmitBlocked::Busy(phase));
        }

        let errors = validate(&*self.draft.borrow());
        if !errors.is_empty() {
            self.errors.set(errors.clone());
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors.set(ValidationErrors::new());
        self.phase.set(FormPhase::Submitting);
        Ok(self.draft())
    }

    /// Cierra el envío en vuelo. Devuelve `false` (sin tocar nada) si la
    /// vista ya fue desmontada.
    pub fn finish_submit(&self, succeeded: bool) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.phase.set(if succeeded { FormPhase::Succeeded } else { FormPhase::Editing });
        true
    }

    pub fn subscribe_errors(&self, callback: impl Fn() + 'static) {
        self.errors.subscribe(callback);
    }

    pub fn subscribe_phase(&self, callback: impl Fn() + 'static) {
        self.phase.subscribe(callback);
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}
