use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{StoryEvent, StoryEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: StoryEventKind) -> StoryEvent;
    /// Lista eventos de un run (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<StoryEvent>;
    /// Ids de run en orden de primera aparición.
    fn runs(&self) -> Vec<Uuid>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<StoryEvent>>,
    order: Vec<Uuid>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: StoryEventKind) -> StoryEvent {
        if !self.inner.contains_key(&run_id) {
            self.order.push(run_id);
        }
        let vec = self.inner.entry(run_id).or_default();
        let ev = StoryEvent { seq: vec.len() as u64,
                              run_id,
                              kind,
                              ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<StoryEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }

    fn runs(&self) -> Vec<Uuid> {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_run_and_runs_keep_order() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(store.append_kind(a, StoryEventKind::RunSucceeded).seq, 0);
        assert_eq!(store.append_kind(b, StoryEventKind::RunSucceeded).seq, 0);
        assert_eq!(store.append_kind(a, StoryEventKind::RunFailed { fail_count: 1 }).seq, 1);
        assert_eq!(store.runs(), vec![a, b]);
        assert_eq!(store.list(a).len(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
