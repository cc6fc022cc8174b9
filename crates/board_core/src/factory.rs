use chrono::{DateTime, Duration, TimeZone, Utc};
use shared::domain::{Order, OrderDraft, OrderId};

/// Builds a new order with a fresh id and creation time.
pub trait OrderFactory {
    fn create(&mut self, draft: OrderDraft) -> Order;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidOrderFactory;

impl OrderFactory for UuidOrderFactory {
    fn create(&mut self, draft: OrderDraft) -> Order {
        Order {
            id: OrderId::random(),
            title: draft.title,
            table: draft.table,
            column: draft.column,
            created: Utc::now(),
        }
    }
}

/// Deterministic ids (`order-1`, `order-2`, ...) one minute apart, for
/// scripted replays and tests.
#[derive(Debug, Clone)]
pub struct SequentialOrderFactory {
    prefix: String,
    issued: u64,
    start: DateTime<Utc>,
}

impl SequentialOrderFactory {
    pub fn new(prefix: impl Into<String>, start: DateTime<Utc>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
            start,
        }
    }
}

impl Default for SequentialOrderFactory {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new("order", start)
    }
}

impl OrderFactory for SequentialOrderFactory {
    fn create(&mut self, draft: OrderDraft) -> Order {
        let created = self.start + Duration::minutes(self.issued as i64);
        self.issued += 1;
        Order {
            id: OrderId::new(format!("{}-{}", self.prefix, self.issued)),
            title: draft.title,
            table: draft.table,
            column: draft.column,
            created,
        }
    }
}
