use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::trace;

pub type Callback<T> = Rc<dyn Fn(&T)>;
pub type SubscriptionId = u64;

type Listeners<T> = Rc<RefCell<HashMap<SubscriptionId, Callback<T>>>>;

/// Handle returned by `subscribe`; consuming it detaches the listener.
pub struct Unsubscriber<T: std::fmt::Debug> {
    listeners: Weak<RefCell<HashMap<SubscriptionId, Callback<T>>>>,
    id: SubscriptionId,
}

impl<T: std::fmt::Debug> Unsubscriber<T> {
    pub fn unsubscribe(self) -> bool {
        match self.listeners.upgrade() {
            Some(listeners) => listeners.borrow_mut().remove(&self.id).is_some(),
            None => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Unsubscriber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsubscriber({})", self.id)
    }
}

pub struct EventEmitter<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

pub struct EventObserver<T: std::fmt::Debug> {
    channel: Channel<T>,
}

impl<T: std::fmt::Debug> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

pub struct Channel<T: std::fmt::Debug> {
    listeners: Listeners<T>,
    next_id: Rc<RefCell<SubscriptionId>>,
}

impl<T: std::fmt::Debug> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<T: std::fmt::Debug> Channel<T> {
    pub fn new() -> (EventEmitter<T>, EventObserver<T>) {
        let listeners = Rc::new(RefCell::new(HashMap::new()));
        let next_id = Rc::new(RefCell::new(0));
        let channel = Channel {
            listeners: Rc::clone(&listeners),
            next_id: Rc::clone(&next_id),
        };
        (
            EventEmitter {
                channel: channel.clone(),
            },
            EventObserver {
                channel: channel.clone(),
            },
        )
    }

    pub fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id += 1;
            id
        };
        self.listeners.borrow_mut().insert(id, Rc::new(callback));
        Unsubscriber {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn emit(&self, data: &T) {
        // snapshot so a callback may subscribe/unsubscribe mid-emit
        let callbacks: Vec<Callback<T>> = {
            let listeners = self.listeners.borrow();
            trace!(target: "events", "Emitting event to {} listeners: {:?}", listeners.len(), data);
            listeners.values().cloned().collect()
        };
        for listener in callbacks {
            listener(data);
        }
    }

    pub fn clear(&self) {
        self.listeners.borrow_mut().clear();
    }
}

impl<T: std::fmt::Debug> EventEmitter<T> {
    pub fn emit(&self, data: &T) {
        self.channel.emit(data);
    }
}

impl<T: std::fmt::Debug> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        self.channel.subscribe(callback)
    }
}
