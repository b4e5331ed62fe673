use contracts::dashboards::d501_ticket_sales::{
    TicketSalesItem, TicketSalesResponse, TicketSalesSummary,
};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

/// Ticket sales view with the card header figures
pub fn get_ticket_sales(
    snapshot: &Snapshot<TicketSalesItem>,
    params: &ViewParams,
) -> Result<TicketSalesResponse, ViewError> {
    let view = derive_view(snapshot, params)?;
    let overall_change = view
        .aggregates
        .change
        .as_ref()
        .and_then(|change| change.percent_change);
    let summary = summarize(&view.records, overall_change);
    Ok(TicketSalesResponse { view, summary })
}

fn summarize(items: &[TicketSalesItem], overall_change: Option<f64>) -> TicketSalesSummary {
    TicketSalesSummary {
        total_tickets: items.iter().map(|i| i.total_tickets).sum(),
        previous_total: items.iter().map(|i| i.previous_total).sum(),
        overall_change,
        max_tickets: items
            .iter()
            .map(|i| i.total_tickets)
            .max()
            .unwrap_or(0)
            .max(1),
        last_updated: items.first().map(|i| i.last_updated),
    }
}
