//! Sheet body content
//!
//! Read-only records the host supplies for the sheet body. The controller
//! renders nothing itself; it hands these back to the host in the order
//! given and imposes no ordering or uniqueness constraints.

use std::fmt;

/// Severity of a reported risk area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Badge label, lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reported risk area shown in the "nearby" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskRecord {
    pub id: String,
    pub location: String,
    pub risk_level: RiskLevel,
    pub description: String,
    /// Human-readable recency label ("15 min ago")
    pub last_reported: String,
}

/// A recently routed destination shown in the "routes" section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub destination: String,
    /// Human-readable duration label ("12 min")
    pub duration: String,
    pub risk_level: RiskLevel,
    /// Number of alternative routes available
    pub alternatives: u32,
}

/// Everything the host renders inside the sheet body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetContent {
    /// Risk areas, rendered in the order given
    pub nearby_risks: Vec<RiskRecord>,
    /// Recent routes, rendered in the order given
    pub recent_routes: Vec<RouteRecord>,
}

impl SheetContent {
    pub fn new(nearby_risks: Vec<RiskRecord>, recent_routes: Vec<RouteRecord>) -> Self {
        Self {
            nearby_risks,
            recent_routes,
        }
    }

    /// True when there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.nearby_risks.is_empty() && self.recent_routes.is_empty()
    }
}
