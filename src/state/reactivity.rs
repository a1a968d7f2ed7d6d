// ============================================================================
// REACTIVITY - Suscriptores notificados tras cada cambio de estado
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista de suscriptores compartida entre clones
#[derive(Clone, Default)]
pub struct Subscribers {
    callbacks: Rc<RefCell<Vec<Callback>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los suscriptores.
    /// Se copia la lista antes de llamar para que un callback pueda suscribir otro.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self.callbacks.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let subscribers = Subscribers::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        subscribers.clone().subscribe(move || counter.set(counter.get() + 1));

        subscribers.notify();
        subscribers.notify();
        assert_eq!(hits.get(), 2);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn callback_may_subscribe_during_notify() {
        let subscribers = Subscribers::new();
        let inner = subscribers.clone();
        subscribers.subscribe(move || inner.subscribe(|| {}));

        subscribers.notify();
        assert_eq!(subscribers.len(), 2);
    }
}
