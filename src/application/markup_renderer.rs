// Markup renderers - KPI cards, activity feed and customer table
use crate::application::activity_feed::ActivityFeed;
use crate::domain::customer::Customer;
use crate::domain::format::format_currency;
use crate::domain::metrics::Kpi;
use maud::{Markup, html};

pub fn render_kpis(kpis: &[Kpi]) -> Markup {
    html! {
        @for kpi in kpis {
            @let direction = kpi.direction();
            article class="kpi-card" {
                span class={ "kpi-trend " (direction.css_class()) } {
                    (direction.symbol()) " " (format!("{:.1}%", (kpi.trend * 100.0).abs()))
                }
                h3 { (kpi.label) }
                strong { (kpi.value) }
                small { (kpi.delta_label) }
            }
        }
    }
}

pub fn render_activity(feed: &ActivityFeed) -> Markup {
    html! {
        @for entry in &feed.entries {
            li class="activity__item" {
                span class="activity__label" { (entry.label) }
                span class="activity__value" { (entry.value) }
            }
        }
    }
}

/// Table body rows; the badge class is the account's health.
pub fn render_customers(customers: &[Customer]) -> Markup {
    html! {
        @for customer in customers {
            tr {
                td { (customer.name) }
                td { (format_currency(customer.value as f64)) }
                td {
                    span class={ "badge " (customer.health.as_str()) } { (customer.health.as_str()) }
                }
            }
        }
    }
}
