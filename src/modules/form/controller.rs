use super::events::{EventDispatcher, FormEvent, FormEventKind, Listener};
use super::fields::{FieldId, Notifier, PasswordInput, Visibility};
use super::toggle::VisibilityToggle;
use super::validator::{FormValidator, SubmitOutcome};

/// Everything the form's listeners read and write
pub struct FormState<F, N> {
    pub validator: FormValidator<F, N>,
    pub toggle: VisibilityToggle,
    last_outcome: Option<SubmitOutcome>,
}

impl<F, N> FormState<F, N> {
    pub fn last_outcome(&self) -> Option<SubmitOutcome> {
        self.last_outcome
    }
}

/// Submit listener: delegates to the validator and records the outcome
pub fn on_submit<F: PasswordInput, N: Notifier>(state: &mut FormState<F, N>, event: &mut FormEvent) {
    if let FormEvent::Submit(submit) = event {
        state.last_outcome = Some(state.validator.handle_submit(submit));
    }
}

/// Change listener for the show-password checkbox
pub fn on_show_password_change<F: PasswordInput, N: Notifier>(
    state: &mut FormState<F, N>,
    event: &mut FormEvent,
) {
    if let FormEvent::Change { checked } = event {
        let (new_password, confirm_password) = state.validator.fields_mut();
        state.toggle.on_change(*checked, new_password, confirm_password);
    }
}

/// The update-password form: two inputs, the show-password checkbox and
/// the listeners wired to them.
pub struct PasswordForm<F, N> {
    state: FormState<F, N>,
    dispatcher: EventDispatcher<FormState<F, N>>,
}

impl<F: PasswordInput, N: Notifier> PasswordForm<F, N> {
    /// Builds the form and registers the submit and change listeners.
    /// Both inputs start obscured.
    pub fn new(mut new_password: F, mut confirm_password: F, notifier: N) -> Self {
        new_password.set_visibility(Visibility::Obscured);
        confirm_password.set_visibility(Visibility::Obscured);

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_listener(FormEventKind::Submit, on_submit::<F, N>);
        dispatcher.add_listener(FormEventKind::Change, on_show_password_change::<F, N>);

        Self {
            state: FormState {
                validator: FormValidator::new(new_password, confirm_password, notifier),
                toggle: VisibilityToggle::new(),
                last_outcome: None,
            },
            dispatcher,
        }
    }

    /// Registers an extra listener after the built-in ones
    pub fn add_listener(&mut self, kind: FormEventKind, listener: Listener<FormState<F, N>>) {
        self.dispatcher.add_listener(kind, listener);
    }

    /// Runs every listener for the event and hands the event back so the
    /// host can inspect its default-action flag.
    pub fn dispatch(&mut self, mut event: FormEvent) -> FormEvent {
        self.dispatcher.dispatch(&mut self.state, &mut event);
        event
    }

    /// Raises a submit event and reports what happened
    pub fn submit(&mut self) -> SubmitOutcome {
        self.state.last_outcome = None;
        self.dispatch(FormEvent::submit());
        self.state.last_outcome.unwrap_or(SubmitOutcome::Blocked)
    }

    /// Raises a change event for the show-password checkbox
    pub fn set_show_password(&mut self, checked: bool) {
        self.dispatch(FormEvent::Change { checked });
    }

    pub fn show_password(&self) -> bool {
        self.state.toggle.is_checked()
    }

    pub fn visibility(&self) -> Visibility {
        self.state.toggle.mode()
    }

    pub fn field(&self, id: FieldId) -> &F {
        self.state.validator.field(id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut F {
        self.state.validator.field_mut(id)
    }

    pub fn notifier(&self) -> &N {
        self.state.validator.notifier()
    }

    pub fn state(&self) -> &FormState<F, N> {
        &self.state
    }
}
