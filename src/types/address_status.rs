use serde::{Deserialize, Serialize};

use super::address::Address;

/// Body of `GET /check/{address}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressStatus {
    pub description: String,
    pub risk: String,
}

impl AddressStatus {
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from(self.risk.as_str())
    }
}

/// Backend risk vocabulary is not guaranteed, anything unknown stays unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unstyled(String),
}

impl From<&str> for RiskLevel {
    fn from(risk: &str) -> Self {
        match risk.to_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unstyled(risk.to_string()),
        }
    }
}

impl RiskLevel {
    pub fn is_styled(&self) -> bool {
        !matches!(self, RiskLevel::Unstyled(_))
    }

    /// `risk-<level>`; unstyled values keep their raw text, lowercased.
    pub fn class(&self) -> String {
        match self {
            RiskLevel::Low => "risk-low".to_string(),
            RiskLevel::Medium => "risk-medium".to_string(),
            RiskLevel::High => "risk-high".to_string(),
            RiskLevel::Unstyled(raw) => format!("risk-{}", raw.to_lowercase()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub address: Address,
}

/// Whatever `POST /report` answers with. Only success or failure matters.
pub type ReportResult = serde_json::Value;
