//! Order tickets: the finished order plus an id and a timestamp, rendered
//! for the console.
//!
//! ## Text Layout
//! ```text
//! Espresso = $3.00
//! Your order: Espresso, Milk, Sugar, Whipped Cream
//! Total: $4.40
//! ```

use barista_core::{Addition, BaseItem, Order, OrderSummary, Priceable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::OutputFormat;
use crate::error::CounterResult;

/// A finished order.
///
/// Serialize-only: the summary is derived from `base` and `additions`, so a
/// ticket is never rebuilt from its JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTicket {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub base: BaseItem,
    pub additions: Vec<Addition>,
    pub summary: OrderSummary,
}

impl OrderTicket {
    /// Builds the order and stamps it with a fresh id and the current time.
    pub fn issue(base: BaseItem, additions: &[Addition]) -> Self {
        Self::issue_at(base, additions, Uuid::new_v4(), Utc::now())
    }

    pub fn issue_at(
        base: BaseItem,
        additions: &[Addition],
        id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        let order = Order::new(base).add_all(additions.iter().copied());
        let summary = order.summary();

        info!(
            ticket = %id,
            description = %summary.description,
            total = %summary.total,
            layers = summary.layers,
            "order ready"
        );

        OrderTicket {
            id,
            created_at,
            base,
            additions: additions.to_vec(),
            summary,
        }
    }

    /// The unwrapped base line, e.g. `Espresso = $3.00`.
    pub fn base_line(&self) -> String {
        format!("{} = {}", self.base.description(), self.base.cost())
    }

    pub fn render_text(&self) -> String {
        format!(
            "{}\nYour order: {}\nTotal: {}",
            self.base_line(),
            self.summary.description,
            self.summary.total
        )
    }

    pub fn render_json(&self) -> CounterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> CounterResult<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barista_core::Money;
    use chrono::TimeZone;

    fn fixed_ticket(base: BaseItem, additions: &[Addition]) -> OrderTicket {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 8, 30, 0).unwrap();
        OrderTicket::issue_at(base, additions, id, at)
    }

    #[test]
    fn test_default_order_text() {
        let ticket = fixed_ticket(
            BaseItem::Espresso,
            &[Addition::Milk, Addition::Sugar, Addition::WhippedCream],
        );

        assert_eq!(
            ticket.render_text(),
            "Espresso = $3.00\nYour order: Espresso, Milk, Sugar, Whipped Cream\nTotal: $4.40"
        );
        assert_eq!(ticket.summary.total, Money::from_cents(440));
    }

    #[test]
    fn test_plain_drink() {
        let ticket = fixed_ticket(BaseItem::Tea, &[]);
        // Money always displays two decimals, so whole prices read "$2.00" not "$2"
        assert_eq!(ticket.base_line(), "Tea = $2.00");
        assert_eq!(ticket.summary.description, "Tea");
        assert_eq!(ticket.summary.layers, 0);
    }

    #[test]
    fn test_json_rendering() {
        let ticket = fixed_ticket(BaseItem::Latte, &[Addition::Syrup]);
        let json: serde_json::Value =
            serde_json::from_str(&ticket.render(OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(json["base"], "latte");
        assert_eq!(json["additions"], serde_json::json!(["syrup"]));
        assert_eq!(json["summary"]["description"], "Latte, Syrup");
        assert_eq!(json["summary"]["total"], 410);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2026-01-02T08:30:00"));
    }

    #[test]
    fn test_issue_assigns_unique_ids() {
        let a = OrderTicket::issue(BaseItem::Tea, &[]);
        let b = OrderTicket::issue(BaseItem::Tea, &[]);
        assert_ne!(a.id, b.id);
    }
}
