// src/model/orders.rs

/// A replenishment order in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOrder {
    pub arrival_day: i64,
    pub quantity: f64,
}

/// Orders placed but not yet received during one simulation run.
///
/// Rarely holds more than a couple of entries, so a flat Vec is enough.
#[derive(Debug, Clone, Default)]
pub struct PendingOrders {
    orders: Vec<PendingOrder>,
}

impl PendingOrders {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Step 1: Goods due today arrive.
    /// Matches on the exact day; an order scheduled for an earlier day that
    /// was somehow missed stays in the queue.
    pub fn take_arrivals(&mut self, day: i64) -> f64 {
        let mut arrived = 0.0;
        self.orders.retain(|order| {
            if order.arrival_day == day {
                arrived += order.quantity;
                false
            } else {
                true
            }
        });
        arrived
    }

    /// Step 2: A new order enters the pipeline.
    pub fn push(&mut self, order: PendingOrder) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrivals_match_exact_day_only() {
        let mut orders = PendingOrders::new();
        orders.push(PendingOrder {
            arrival_day: 3,
            quantity: 40.0,
        });
        orders.push(PendingOrder {
            arrival_day: 5,
            quantity: 60.0,
        });
        orders.push(PendingOrder {
            arrival_day: 3,
            quantity: 10.0,
        });

        assert_eq!(orders.take_arrivals(2), 0.0);
        assert_eq!(orders.take_arrivals(3), 50.0);
        assert_eq!(orders.len(), 1);
        // Day 5 was never polled on day 4; polling day 6 does not deliver it.
        assert_eq!(orders.take_arrivals(6), 0.0);
        assert_eq!(orders.take_arrivals(5), 60.0);
        assert!(orders.is_empty());
    }
}
