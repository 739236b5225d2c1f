use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher records events; clones share the same record so a caller can
// keep a handle after boxing one into a service.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
