// Customer accounts shown in the accounts table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Good,
    Warning,
    Risk,
}

impl Health {
    pub fn as_str(self) -> &'static str {
        match self {
            Health::Good => "good",
            Health::Warning => "warning",
            Health::Risk => "risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Customer {
    pub name: &'static str,
    pub value: i64,
    pub health: Health,
}

impl Customer {
    pub const fn new(name: &'static str, value: i64, health: Health) -> Self {
        Self {
            name,
            value,
            health,
        }
    }
}

pub const CUSTOMERS: [Customer; 5] = [
    Customer::new("Acme Holdings", 420_000, Health::Good),
    Customer::new("Northwind Group", 350_000, Health::Warning),
    Customer::new("Lumina Retail", 285_000, Health::Good),
    Customer::new("Vertex Media", 198_000, Health::Risk),
    Customer::new("Atlas Mobility", 167_000, Health::Good),
];
