use serde::Deserialize;

use crate::error::SiteError;

const BUILTIN_PLANS: &str = include_str!("../../assets/pricing_plans.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub tagline: String,
    pub monthly: u64,
    pub annual: u64,
    #[serde(default)]
    pub featured: bool,
    pub features: Vec<String>,
    pub cta: String,
}

impl Plan {
    pub fn price(&self, cycle: BillingCycle) -> u64 {
        match cycle {
            BillingCycle::Monthly => self.monthly,
            BillingCycle::Annual => self.annual,
        }
    }

    /// Name used when logging CTA clicks.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "Plan"
        } else {
            name
        }
    }
}

pub fn builtin_plans() -> Result<Vec<Plan>, SiteError> {
    Ok(serde_json::from_str(BUILTIN_PLANS)?)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn from_toggle(annual: bool) -> Self {
        if annual {
            BillingCycle::Annual
        } else {
            BillingCycle::Monthly
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    /// Indian rupee, en-IN grouping (12,34,567).
    Rupee,
    /// US dollar, digits as-is.
    Dollar,
}

impl Currency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inr" | "rupee" => Some(Currency::Rupee),
            "usd" | "dollar" => Some(Currency::Dollar),
            _ => None,
        }
    }

    pub fn format(self, amount: u64) -> String {
        match self {
            Currency::Rupee => format!("₹{}", group_en_in(amount)),
            Currency::Dollar => format!("${}", amount),
        }
    }
}

/// Last three digits form a group, everything before is grouped in pairs.
fn group_en_in(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
