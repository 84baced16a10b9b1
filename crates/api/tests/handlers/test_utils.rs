use std::sync::Arc;

use availability_api::{app, ApiState};
use availability_core::{models::time_slot::TimeSlot, store::AvailabilityStore, working_hours::WorkingHours};
use availability_db::MemoryAvailabilityStore;
use axum_test::TestServer;
use uuid::Uuid;

pub struct TestContext {
    pub professor_id: Uuid,
    pub store: Arc<MemoryAvailabilityStore>,
    pub working_hours: WorkingHours,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_baseline([])
    }

    pub fn with_baseline(slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        let professor_id = Uuid::new_v4();
        Self {
            professor_id,
            store: Arc::new(MemoryAvailabilityStore::with_baseline(professor_id, slots)),
            working_hours: WorkingHours::default(),
        }
    }

    pub fn build_state(&self) -> Arc<ApiState> {
        let store: Arc<dyn AvailabilityStore> = self.store.clone();
        Arc::new(ApiState {
            store,
            working_hours: self.working_hours.clone(),
        })
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(app(self.build_state())).expect("Failed to build test server")
    }

    pub fn availability_path(&self) -> String {
        format!("/api/professors/{}/availability", self.professor_id)
    }
}

pub fn slot(day: u32, hour: u32) -> TimeSlot {
    TimeSlot::at(2024, 5, day, hour).unwrap()
}
