//! In-memory order store

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::PizzaOrder;
use std::sync::Arc;

use super::{OrderStore, StoreResult};

/// id → order; clones share the same map
#[derive(Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<DashMap<i32, PizzaOrder>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn save(&self, order: PizzaOrder) -> StoreResult<PizzaOrder> {
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<PizzaOrder>> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> StoreResult<Vec<PizzaOrder>> {
        let mut orders: Vec<PizzaOrder> = self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by_key(|o| o.id);
        Ok(orders)
    }

    async fn delete(&self, order: &PizzaOrder) -> StoreResult<()> {
        self.orders.remove(&order.id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
