//! Vendor detection.

use serde::{Deserialize, Serialize};

use super::rules::{RuleSet, AMAZON_RULES, FLIPKART_RULES};

/// Marketplace that issued an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Amazon,
    Flipkart,
    Unknown,
}

impl Vendor {
    /// Lowercase tag (`amazon`, `flipkart`, `unknown`).
    pub fn tag(self) -> &'static str {
        match self {
            Vendor::Amazon => "amazon",
            Vendor::Flipkart => "flipkart",
            Vendor::Unknown => "unknown",
        }
    }

    /// Value written to the Invoice Source column.
    pub fn source_label(self) -> &'static str {
        match self {
            Vendor::Amazon => "Amazon",
            Vendor::Flipkart => "Flipkart",
            Vendor::Unknown => "Unknown",
        }
    }

    /// Rule table used for this vendor. Unknown documents fall back to Amazon rules.
    pub fn rule_set(self) -> &'static RuleSet {
        match self {
            Vendor::Flipkart => &FLIPKART_RULES,
            Vendor::Amazon | Vendor::Unknown => &AMAZON_RULES,
        }
    }
}

impl std::fmt::Display for Vendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classify a document by file name first, then by text content.
pub fn detect_vendor(text: &str, file_name: &str) -> Vendor {
    let name = file_name.to_lowercase();
    if name.contains("amazon") {
        return Vendor::Amazon;
    }
    if name.contains("flipkart") {
        return Vendor::Flipkart;
    }

    let content = text.to_lowercase();
    if content.contains("amazon") || text.contains("ASSPL-Amazon") {
        Vendor::Amazon
    } else if content.contains("flipkart") {
        Vendor::Flipkart
    } else {
        Vendor::Unknown
    }
}
