//! Pizza Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order status
///
/// A label only: any status may follow any other. The variant name is both the
/// JSON value and the text stored in `pizza_order.status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Ordered,
    Baking,
    Delivering,
    /// Accepts the legacy name `YummyInMyTummy` on input
    #[serde(alias = "YummyInMyTummy")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Ordered,
        OrderStatus::Baking,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
    ];

    /// Stored / wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Ordered",
            OrderStatus::Baking => "Baking",
            OrderStatus::Delivering => "Delivering",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status text outside the encoding table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ordered" => Ok(OrderStatus::Ordered),
            "Baking" => Ok(OrderStatus::Baking),
            "Delivering" => Ok(OrderStatus::Delivering),
            "Delivered" | "YummyInMyTummy" => Ok(OrderStatus::Delivered),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Pizza order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PizzaOrder {
    /// Client-supplied primary key
    pub id: i32,
    pub status: OrderStatus,
    pub order_time: DateTime<Utc>,
}

impl PizzaOrder {
    /// New order in `Ordered` state, stamped with the current time
    pub fn new(id: i32) -> Self {
        Self {
            id,
            status: OrderStatus::Ordered,
            order_time: crate::util::now_utc(),
        }
    }
}

/// `pizza_order` table row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PizzaOrderRow {
    pub id: i32,
    pub status: String,
    pub order_time: DateTime<Utc>,
}

impl TryFrom<PizzaOrderRow> for PizzaOrder {
    type Error = UnknownOrderStatus;

    fn try_from(row: PizzaOrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            status: row.status.parse()?,
            order_time: row.order_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_encoding_table() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn legacy_final_status_name() {
        assert_eq!(
            "YummyInMyTummy".parse::<OrderStatus>(),
            Ok(OrderStatus::Delivered)
        );
        let status: OrderStatus = serde_json::from_str("\"YummyInMyTummy\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Delivered\"");
    }

    #[test]
    fn unknown_status_rejected() {
        assert_eq!(
            "Eaten".parse::<OrderStatus>(),
            Err(UnknownOrderStatus("Eaten".to_string()))
        );
        assert!("ordered".parse::<OrderStatus>().is_err());
        assert!(serde_json::from_str::<OrderStatus>("\"Burnt\"").is_err());
    }

    #[test]
    fn new_order_defaults() {
        let before = crate::util::now_utc();
        let order = PizzaOrder::new(1);
        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::Ordered);
        assert!(order.order_time >= before);
    }

    #[test]
    fn json_field_names() {
        let order = PizzaOrder {
            id: 42,
            status: OrderStatus::Baking,
            order_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["id"], 42);
        assert_eq!(value["status"], "Baking");
        assert_eq!(value["orderTime"], "2024-05-01T12:30:00Z");
        assert!(value.get("order_time").is_none());
    }

    #[test]
    fn row_conversion() {
        let when = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let row = PizzaOrderRow {
            id: 3,
            status: "Delivering".to_string(),
            order_time: when,
        };
        let order = PizzaOrder::try_from(row).unwrap();
        assert_eq!(order.status, OrderStatus::Delivering);
        assert_eq!(order.order_time, when);

        let bad = PizzaOrderRow {
            id: 4,
            status: "post_status_info".to_string(),
            order_time: when,
        };
        assert!(PizzaOrder::try_from(bad).is_err());
    }
}
