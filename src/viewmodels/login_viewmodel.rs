// ============================================================================
// LOGIN VIEWMODEL - LÓGICA DEL FORMULARIO DE LOGIN
// ============================================================================
// Valida, llama a la API, persiste el token y navega al dashboard.
// Los errores operacionales van al canal de notificaciones, nunca al mapa de
// errores de campo.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, LoginField, LoginFieldKey, LoginResponse};
use crate::services::{CarListingApi, NotificationChannel, TokenStore};
use crate::state::{FormState, Navigator, Route, SubmitBlocked, SubmitOutcome};
use crate::viewmodels::validation::validate_login;

const REJECTED_LOGIN: &str = "Invalid email or password";

pub struct LoginViewModel<A, S, N> {
    form: FormState<Credentials, LoginFieldKey>,
    api: Rc<A>,
    store: S,
    navigator: N,
    notifier: NotificationChannel,
}

impl<A, S, N> LoginViewModel<A, S, N>
where
    A: CarListingApi,
    S: TokenStore,
    N: Navigator,
{
    pub fn new(api: Rc<A>, store: S, navigator: N, notifier: NotificationChannel) -> Self {
        Self {
            form: FormState::new(Credentials::default()),
            api,
            store,
            navigator,
            notifier,
        }
    }

    pub fn form(&self) -> &FormState<Credentials, LoginFieldKey> {
        &self.form
    }

    pub fn field_changed(&self, change: LoginField) -> bool {
        self.form.edit(|creds| creds.apply(change))
    }

    /// Envía el formulario. Un segundo `submit` mientras el primero está en
    /// vuelo devuelve `Busy` sin tocar la red.
    pub async fn submit(&self) -> SubmitOutcome {
        let credentials = match self.form.begin_submit(validate_login) {
            Ok(credentials) => credentials,
            Err(SubmitBlocked::Busy(phase)) => {
                log::debug!("⏳ [LOGIN] Envío ignorado en fase {:?}", phase);
                return SubmitOutcome::Busy;
            }
            Err(SubmitBlocked::Invalid(errors)) => {
                log::info!("📝 [LOGIN] {} campo(s) con errores", errors.len());
                return SubmitOutcome::Invalid;
            }
        };

        log::info!("🔐 [LOGIN] Iniciando sesión: {}", credentials.email);
        let result = self.api.login(&credentials).await;

        if !self.form.is_mounted() {
            log::debug!("🗑️ [LOGIN] Respuesta descartada, vista desmontada");
            return SubmitOutcome::Stale;
        }

        match self.complete_login(result) {
            Ok(email) => {
                self.form.finish_submit(true);
                log::info!("✅ [LOGIN] Sesión iniciada: {}", email);
                self.notifier.success("Welcome", format!("Logged in as {}", email));
                self.navigator.navigate(Route::Dashboard);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                self.form.finish_submit(false);
                self.notifier.report(&err);
                SubmitOutcome::Failed
            }
        }
    }

    /// Interpreta la respuesta y persiste el token. Devuelve el email.
    fn complete_login(&self, result: ApiResult<LoginResponse>) -> ApiResult<String> {
        let response = result?;
        if !response.status {
            return Err(ApiError::Rejected(
                response.message.unwrap_or_else(|| REJECTED_LOGIN.to_string()),
            ));
        }

        let token = response
            .session_token()
            .ok_or_else(|| ApiError::MalformedResponse("login response without user.email".into()))?
            .to_string();

        self.store.write_token(&token)?;
        Ok(token)
    }

    /// La vista se destruye: las respuestas pendientes se descartan
    pub fn unmount(&self) {
        self.form.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationEvent, Severity};
    use std::cell::RefCell;
    use crate::state::FormPhase;
    use crate::test_support::{recording_channel, FakeApi, MemoryTokenStore, NavKind, RecordingNavigator};
    use futures::executor::block_on;

    type Vm = LoginViewModel<FakeApi, Rc<MemoryTokenStore>, Rc<RecordingNavigator>>;

    struct Harness {
        vm: Vm,
        api: Rc<FakeApi>,
        store: Rc<MemoryTokenStore>,
        navigator: Rc<RecordingNavigator>,
        events: Rc<RefCell<Vec<NotificationEvent>>>,
    }

    fn harness(api: FakeApi) -> Harness {
        let api = Rc::new(api);
        let store = Rc::new(MemoryTokenStore::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let (channel, events) = recording_channel();
        let vm = LoginViewModel::new(api.clone(), store.clone(), navigator.clone(), channel);
        vm.field_changed(LoginField::Email("ali@cars.pk".into()));
        vm.field_changed(LoginField::Password("secret1".into()));
        Harness { vm, api, store, navigator, events }
    }

    #[test]
    fn successful_login_persists_token_and_navigates() {
        let h = harness(FakeApi::default());

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Succeeded);
        assert_eq!(h.store.token().as_deref(), Some("ali@cars.pk"));
        assert_eq!(h.navigator.history(), vec![(NavKind::Push, Route::Dashboard)]);
        assert_eq!(h.vm.form().phase(), FormPhase::Succeeded);
        assert_eq!(h.events.borrow()[0].severity, Severity::Success);
    }

    #[test]
    fn invalid_fields_never_reach_the_network() {
        let h = harness(FakeApi::default());
        h.vm.field_changed(LoginField::Email("not-an-email".into()));
        h.vm.field_changed(LoginField::Password("123".into()));

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Invalid);
        assert_eq!(h.api.login_calls.get(), 0);
        let errors = h.vm.form().errors();
        assert!(errors.contains(LoginFieldKey::Email));
        assert!(errors.contains(LoginFieldKey::Password));
        assert!(h.events.borrow().is_empty());
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let h = harness(FakeApi::default());

        let (first, second) = block_on(async { futures::join!(h.vm.submit(), h.vm.submit()) });

        assert_eq!(first, SubmitOutcome::Succeeded);
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(h.api.login_calls.get(), 1);
        assert_eq!(h.navigator.history().len(), 1);
    }

    #[test]
    fn response_after_unmount_is_stale() {
        let h = harness(FakeApi::default());

        let (outcome, _) = block_on(async {
            futures::join!(h.vm.submit(), async { h.vm.unmount() })
        });

        assert_eq!(outcome, SubmitOutcome::Stale);
        assert!(h.navigator.history().is_empty());
        assert!(h.events.borrow().is_empty());
        assert_eq!(h.store.token(), None);
    }

    #[test]
    fn rejected_login_returns_to_editing_with_error_toast() {
        let api = FakeApi::default();
        *api.login_response.borrow_mut() =
            Ok(LoginResponse { status: false, user: None, message: None });
        let h = harness(api);

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Failed);
        assert_eq!(h.vm.form().phase(), FormPhase::Editing);
        assert!(h.vm.form().errors().is_empty());
        let events = h.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Error);
        assert_eq!(events[0].body, "Invalid email or password");
    }

    #[test]
    fn response_without_user_is_malformed() {
        let api = FakeApi::default();
        *api.login_response.borrow_mut() =
            Ok(LoginResponse { status: true, user: None, message: None });
        let h = harness(api);

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Failed);
        assert_eq!(h.store.token(), None);
        assert!(h.navigator.history().is_empty());
        assert_eq!(h.events.borrow()[0].title, "Unexpected response");
    }

    #[test]
    fn storage_failure_is_an_operational_error() {
        let h = harness(FakeApi::default());
        h.store.fail_writes.set(true);

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Failed);
        assert!(h.navigator.history().is_empty());
        assert_eq!(h.events.borrow()[0].title, "Storage error");
    }

    #[test]
    fn network_failure_allows_retry() {
        let h = harness(FakeApi::failing_with(ApiError::Network("offline".into())));

        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Failed);
        assert!(h.vm.field_changed(LoginField::Password("secret2".into())));

        *h.api.login_response.borrow_mut() = FakeApi::default().login_response.into_inner();
        assert_eq!(block_on(h.vm.submit()), SubmitOutcome::Succeeded);
        assert_eq!(h.api.login_calls.get(), 2);
    }
}
