use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a raw string does not belong to one of the fixed sets below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant;

/// Recurrence cadence of a subscription charge. Stored lower-case regardless
/// of input case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 5] = [
        BillingCycle::Daily,
        BillingCycle::Weekly,
        BillingCycle::Monthly,
        BillingCycle::Quarterly,
        BillingCycle::Yearly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Daily => "daily",
            BillingCycle::Weekly => "weekly",
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
        }
    }

    /// Allowed values joined for validation messages.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for BillingCycle {
    type Err = UnknownVariant;

    // Case-insensitive: "MONTHLY" and "monthly" are the same cycle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(BillingCycle::Daily),
            "weekly" => Ok(BillingCycle::Weekly),
            "monthly" => Ok(BillingCycle::Monthly),
            "quarterly" => Ok(BillingCycle::Quarterly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(UnknownVariant),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub const ALLOWED: &'static [&'static str] = &["active", "paused", "cancelled"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for SubscriptionStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "paused" => Ok(SubscriptionStatus::Paused),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            _ => Err(UnknownVariant),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Entertainment,
    Software,
    Gaming,
    Music,
    Health,
    Education,
    News,
    #[serde(rename = "Cloud Services")]
    CloudServices,
    Other,
}

impl Category {
    pub const ALLOWED: &'static [&'static str] = &[
        "Entertainment",
        "Software",
        "Gaming",
        "Music",
        "Health",
        "Education",
        "News",
        "Cloud Services",
        "Other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Software => "Software",
            Category::Gaming => "Gaming",
            Category::Music => "Music",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::News => "News",
            Category::CloudServices => "Cloud Services",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entertainment" => Ok(Category::Entertainment),
            "Software" => Ok(Category::Software),
            "Gaming" => Ok(Category::Gaming),
            "Music" => Ok(Category::Music),
            "Health" => Ok(Category::Health),
            "Education" => Ok(Category::Education),
            "News" => Ok(Category::News),
            "Cloud Services" => Ok(Category::CloudServices),
            "Other" => Ok(Category::Other),
            _ => Err(UnknownVariant),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Manual,
    Gmail,
}

impl Source {
    pub const ALLOWED: &'static [&'static str] = &["manual", "gmail"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Manual => "manual",
            Source::Gmail => "gmail",
        }
    }
}

impl FromStr for Source {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(Source::Manual),
            "gmail" => Ok(Source::Gmail),
            _ => Err(UnknownVariant),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALLOWED: &'static [&'static str] = &["INR", "USD", "EUR", "GBP"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl FromStr for Currency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(UnknownVariant),
        }
    }
}
