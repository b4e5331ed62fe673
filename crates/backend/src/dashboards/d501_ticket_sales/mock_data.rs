use chrono::{Duration, Utc};
use contracts::dashboards::d501_ticket_sales::TicketSalesItem;

fn item(
    id: &str,
    city_name: &str,
    cinema_name: &str,
    total_tickets: i64,
    previous_total: i64,
    percent_change: f64,
    minutes_ago: i64,
) -> TicketSalesItem {
    TicketSalesItem {
        id: id.to_string(),
        city_name: city_name.to_string(),
        cinema_name: cinema_name.to_string(),
        total_tickets,
        previous_total,
        percent_change,
        last_updated: Utc::now() - Duration::minutes(minutes_ago),
    }
}

/// Today's ticket sales per cinema
pub fn records() -> Vec<TicketSalesItem> {
    vec![
        item("1", "New York", "Empire Cinema", 823, 756, 8.9, 15),
        item("2", "Los Angeles", "Hollywood Dreams", 612, 680, -10.0, 5),
        item("3", "Chicago", "Windy City Cinema", 405, 387, 4.7, 10),
        item("4", "San Francisco", "Golden Gate Movies", 347, 302, 14.9, 12),
        item("5", "New York", "Manhattan Screens", 289, 321, -9.9, 8),
    ]
}
