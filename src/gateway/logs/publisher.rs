use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the structured log
#[derive(Debug, Default)]
pub struct LogPublisher {
    published: usize,
}

impl LogPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> usize {
        self.published
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            "domain event"
        );
        self.published += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let mut publisher = LogPublisher::new();
        let _ = publisher.publish(&event).expect("should publish");
        assert_eq!(1, publisher.published());
    }
}
