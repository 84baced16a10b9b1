use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use availability_core::{
    errors::{AvailabilityError, AvailabilityResult},
    models::{
        availability::{ChangeSet, SubmitResult},
        time_slot::TimeSlot,
    },
    session::EditorSession,
    store::AvailabilityStore,
    working_hours::WorkingHours,
};
use mockall::mock;
use pretty_assertions::assert_eq;
use uuid::Uuid;

mock! {
    pub Store {}

    #[async_trait]
    impl AvailabilityStore for Store {
        async fn fetch_baseline(&self, professor_id: Uuid) -> AvailabilityResult<Vec<TimeSlot>>;

        async fn submit_change_set(
            &self,
            professor_id: Uuid,
            change_set: &ChangeSet,
        ) -> AvailabilityResult<SubmitResult>;
    }
}

fn slot(hour: u32) -> TimeSlot {
    TimeSlot::at(2024, 5, 6, hour).unwrap()
}

#[tokio::test]
async fn open_loads_baseline() {
    let professor_id = Uuid::new_v4();
    let mut store = MockStore::new();
    store
        .expect_fetch_baseline()
        .withf(move |id| *id == professor_id)
        .times(1)
        .returning(|_| Ok(vec![slot(9), slot(10)]));

    let session = EditorSession::open(store, professor_id, WorkingHours::default())
        .await
        .unwrap();

    assert_eq!(session.professor_id(), professor_id);
    assert_eq!(session.engine().baseline().len(), 2);
    assert!(!session.engine().has_changes());
}

#[tokio::test]
async fn submit_sends_change_set_and_reloads() {
    let professor_id = Uuid::new_v4();
    let fetches = Arc::new(AtomicUsize::new(0));
    let mut store = MockStore::new();

    let counter = fetches.clone();
    store
        .expect_fetch_baseline()
        .times(2)
        .returning(move |_| match counter.fetch_add(1, Ordering::SeqCst) {
            0 => Ok(vec![slot(10)]),
            _ => Ok(vec![slot(9)]),
        });
    store
        .expect_submit_change_set()
        .withf(move |id, change_set| {
            *id == professor_id && change_set.add == vec![slot(9)] && change_set.remove == vec![slot(10)]
        })
        .times(1)
        .returning(|_, _| Ok(SubmitResult { added: 1, removed: 1 }));

    let mut session = EditorSession::open(store, professor_id, WorkingHours::default())
        .await
        .unwrap();
    session.engine_mut().toggle_hour(slot(9)).unwrap();
    session.engine_mut().toggle_hour(slot(10)).unwrap();

    let result = session.submit().await.unwrap();

    assert_eq!(result, SubmitResult { added: 1, removed: 1 });
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
    assert!(!session.engine().has_changes());
    assert_eq!(
        session.engine().baseline().iter().copied().collect::<Vec<_>>(),
        vec![slot(9)]
    );
}

#[tokio::test]
async fn empty_change_set_is_not_sent() {
    let mut store = MockStore::new();
    store.expect_fetch_baseline().times(1).returning(|_| Ok(vec![]));
    store.expect_submit_change_set().never();

    let mut session = EditorSession::open(store, Uuid::new_v4(), WorkingHours::default())
        .await
        .unwrap();

    assert_eq!(session.submit().await.unwrap(), SubmitResult::default());
}

#[tokio::test]
async fn failed_submit_keeps_pending_edits() {
    let mut store = MockStore::new();
    store
        .expect_fetch_baseline()
        .times(1)
        .returning(|_| Ok(vec![slot(10)]));
    store
        .expect_submit_change_set()
        .times(1)
        .returning(|_, _| Err(AvailabilityError::Store(eyre::eyre!("connection reset"))));

    let mut session = EditorSession::open(store, Uuid::new_v4(), WorkingHours::default())
        .await
        .unwrap();
    session.engine_mut().toggle_hour(slot(10)).unwrap();
    session.engine_mut().toggle_hour(slot(11)).unwrap();
    let pending = session.engine().compute_change_set();

    let err = session.submit().await.unwrap_err();

    assert!(matches!(err, AvailabilityError::Store(_)));
    assert_eq!(session.engine().compute_change_set(), pending);
    assert!(session.engine().baseline().contains(&slot(10)));

    session.engine_mut().reset();
    assert!(!session.engine().has_changes());
}

#[tokio::test]
async fn failed_open_propagates() {
    let mut store = MockStore::new();
    store
        .expect_fetch_baseline()
        .returning(|id| Err(AvailabilityError::NotFound(format!("Professor {} not found", id))));

    let result = EditorSession::open(store, Uuid::new_v4(), WorkingHours::default()).await;

    assert!(matches!(result, Err(AvailabilityError::NotFound(_))));
}
