// Activity feed catalog

/// The fixed set of events the activity feed samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    NewOrder,
    Renewal,
    ChurnAlert,
    ProductInquiry,
    RefundIssued,
}

pub const ACTIVITY_CATALOG: [ActivityKind; 5] = [
    ActivityKind::NewOrder,
    ActivityKind::Renewal,
    ActivityKind::ChurnAlert,
    ActivityKind::ProductInquiry,
    ActivityKind::RefundIssued,
];

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::NewOrder => "New order",
            ActivityKind::Renewal => "Renewal",
            ActivityKind::ChurnAlert => "Churn alert",
            ActivityKind::ProductInquiry => "Product inquiry",
            ActivityKind::RefundIssued => "Refund issued",
        }
    }
}

/// One rendered line of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub label: &'static str,
    pub value: String,
}

impl ActivityEntry {
    pub fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}
