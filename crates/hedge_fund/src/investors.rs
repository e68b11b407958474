use analyst_core::analysis::AnalysisProfile;
use analyst_core::domain::recommendation::EQUITY_RECOMMENDATIONS;
use analyst_core::registry::{Registry, RegistryEntry, StyleDescriptor};

pub const DEFAULT_INVESTOR: &str = "warren_buffett";

pub static INVESTORS: [RegistryEntry; 3] = [
    RegistryEntry {
        key: "warren_buffett",
        descriptor: StyleDescriptor {
            name: "Warren Buffett",
            focus: "Value Investing",
            metrics: &[
                "P/E Ratio",
                "Debt-to-Equity",
                "Return on Equity",
                "Competitive Advantage",
            ],
        },
    },
    RegistryEntry {
        key: "cathie_wood",
        descriptor: StyleDescriptor {
            name: "Cathie Wood",
            focus: "Disruptive Innovation",
            metrics: &[
                "Market Potential",
                "Innovation Rate",
                "Growth Rate",
                "Industry Disruption",
            ],
        },
    },
    RegistryEntry {
        key: "charlie_munger",
        descriptor: StyleDescriptor {
            name: "Charlie Munger",
            focus: "Mental Models & Value",
            metrics: &[
                "Long-term Outlook",
                "Management Quality",
                "Business Model",
                "Competitive Moat",
            ],
        },
    },
];

pub const PROFILE: AnalysisProfile = AnalysisProfile {
    batch_metrics: ["sentiment", "fundamentals", "technicals", "risk"],
    recommendations: EQUITY_RECOMMENDATIONS,
    batch_reasoning: portfolio_reasoning,
    model_reasoning: investor_reasoning,
};

pub fn registry() -> anyhow::Result<Registry> {
    Registry::new(&INVESTORS, DEFAULT_INVESTOR)
}

fn portfolio_reasoning(symbol: &str) -> String {
    format!("Analysis based on current market conditions and {symbol}'s performance metrics.")
}

fn investor_reasoning(investor: &StyleDescriptor, symbol: &str) -> String {
    format!(
        "{} would evaluate {symbol} primarily on {}.",
        investor.name,
        investor.metrics.join(", ")
    )
}
