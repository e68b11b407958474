//! Valuation models a property can be scored under.

use analyst_core::analysis::AnalysisProfile;
use analyst_core::domain::recommendation::PROPERTY_RECOMMENDATIONS;
use analyst_core::registry::{Registry, RegistryEntry, StyleDescriptor};

pub const DEFAULT_MODEL: &str = "value_based";

pub static VALUATION_MODELS: [RegistryEntry; 3] = [
    RegistryEntry {
        key: "value_based",
        descriptor: StyleDescriptor {
            name: "Value-Based Model",
            focus: "Intrinsic Value",
            metrics: &[
                "Price per Square Foot",
                "Comparable Sales",
                "Replacement Cost",
                "Cap Rate",
            ],
        },
    },
    RegistryEntry {
        key: "cash_flow",
        descriptor: StyleDescriptor {
            name: "Cash Flow Model",
            focus: "Rental Income",
            metrics: &[
                "Rental Yield",
                "Cash-on-Cash Return",
                "Vacancy Rate",
                "Operating Expenses",
            ],
        },
    },
    RegistryEntry {
        key: "appreciation",
        descriptor: StyleDescriptor {
            name: "Appreciation Model",
            focus: "Long-term Growth",
            metrics: &[
                "Neighborhood Trend",
                "Development Pipeline",
                "Population Growth",
                "School Quality",
                "Zoning Outlook",
            ],
        },
    },
];

pub const PROFILE: AnalysisProfile = AnalysisProfile {
    batch_metrics: ["location", "value", "cost", "risk"],
    recommendations: PROPERTY_RECOMMENDATIONS,
    batch_reasoning: property_reasoning,
    model_reasoning,
};

pub fn registry() -> anyhow::Result<Registry> {
    Registry::new(&VALUATION_MODELS, DEFAULT_MODEL)
}

fn property_reasoning(address: &str) -> String {
    format!("Analysis based on current market conditions and comparable properties near {address}.")
}

fn model_reasoning(model: &StyleDescriptor, address: &str) -> String {
    format!(
        "{} would evaluate {address} primarily on {}.",
        model.name,
        model.metrics.join(", ")
    )
}
