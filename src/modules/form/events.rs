use std::collections::HashMap;

/// A submit attempt. Carries the default-action flag the handler clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Event kinds listeners register for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEventKind {
    Submit,
    Change,
}

/// Events raised by the form host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit(SubmitEvent),
    /// The show-password checkbox changed to `checked`
    Change { checked: bool },
}

impl FormEvent {
    pub fn submit() -> Self {
        FormEvent::Submit(SubmitEvent::new())
    }

    pub fn kind(&self) -> FormEventKind {
        match self {
            FormEvent::Submit(_) => FormEventKind::Submit,
            FormEvent::Change { .. } => FormEventKind::Change,
        }
    }

    pub fn default_prevented(&self) -> bool {
        match self {
            FormEvent::Submit(submit) => submit.default_prevented(),
            FormEvent::Change { .. } => false,
        }
    }
}

/// Listener callback. `T` is whatever state the handlers operate on.
pub type Listener<T> = fn(&mut T, &mut FormEvent);

/// Registry of listeners by event kind. Listeners for one kind run in
/// registration order, each to completion.
pub struct EventDispatcher<T> {
    listeners: HashMap<FormEventKind, Vec<Listener<T>>>,
}

impl<T> EventDispatcher<T> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    pub fn add_listener(&mut self, kind: FormEventKind, listener: Listener<T>) {
        self.listeners.entry(kind).or_default().push(listener);
    }

    /// Listeners currently registered for `kind`
    pub fn listeners_for(&self, kind: FormEventKind) -> Vec<Listener<T>> {
        self.listeners.get(&kind).cloned().unwrap_or_default()
    }

    pub fn dispatch(&self, target: &mut T, event: &mut FormEvent) -> usize {
        let listeners = self.listeners_for(event.kind());
        for listener in &listeners {
            listener(target, event);
        }
        listeners.len()
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
