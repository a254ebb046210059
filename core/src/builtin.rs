//! Builtin complaint dataset for the MockCall training app.
//!
//! Seven scenarios across four categories, written for a small-business
//! ISP support desk. Pure data: initialized once, shared for the process
//! lifetime, never mutated.

use crate::{
    catalog::{ComplaintCatalog, ComplaintRecord},
    targets::{DifficultyWeightTable, ResolutionTargets, ResponseTimeTargets},
    types::Difficulty,
};
use std::sync::OnceLock;

/// Scoring multipliers per difficulty.
pub const DIFFICULTY_WEIGHTS: DifficultyWeightTable = DifficultyWeightTable {
    low: 1.0,
    medium: 1.2,
    high: 1.5,
    critical: 2.0,
};

/// Response-time expectations in minutes. Resolution targets tighten as
/// severity rises.
pub const RESPONSE_TIME_TARGETS: ResponseTimeTargets = ResponseTimeTargets {
    initial_minutes: 5,
    followup_minutes: 10,
    resolution_minutes: ResolutionTargets {
        low: 60,
        medium: 45,
        high: 30,
        critical: 15,
    },
};

static CATALOG: OnceLock<ComplaintCatalog> = OnceLock::new();

/// The builtin scenario catalog.
pub fn catalog() -> &'static ComplaintCatalog {
    CATALOG.get_or_init(|| {
        let catalog = build();
        log::debug!(
            "builtin catalog initialized: {} records across {} categories",
            catalog.len(),
            catalog.category_count(),
        );
        catalog
    })
}

fn record(
    id: &str,
    kind: &str,
    scenario: &str,
    initial_complaint: &str,
    difficulty: Difficulty,
    business_impact: &str,
    expected_responses: &[&str],
) -> ComplaintRecord {
    ComplaintRecord {
        id: id.to_string(),
        kind: kind.to_string(),
        scenario: scenario.to_string(),
        initial_complaint: initial_complaint.to_string(),
        difficulty,
        business_impact: business_impact.to_string(),
        expected_responses: expected_responses.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn build() -> ComplaintCatalog {
    ComplaintCatalog::new(vec![
        (
            "internet".to_string(),
            vec![
                record(
                    "int_001",
                    "Service Interruption",
                    "Internet service has been intermittent for the past 24 hours, \
                     affecting business operations",
                    "My business internet keeps dropping every hour! We've lost thousands \
                     in sales because our payment system is down. This is completely \
                     unacceptable for a business account!",
                    Difficulty::High,
                    "High - Payment system affected",
                    &[
                        "Acknowledge urgency for business customer",
                        "Express understanding of revenue impact",
                        "Immediate troubleshooting steps",
                        "Offer business-specific solution/compensation",
                    ],
                ),
                record(
                    "int_002",
                    "Speed Issues",
                    "Business customer reporting significantly slower speeds than \
                     promised in their plan",
                    "We're only getting 50Mbps when we're paying for 300Mbps. Our video \
                     conferences with clients keep freezing!",
                    Difficulty::Medium,
                    "Medium - Client communications affected",
                    &[
                        "Verify plan details",
                        "Run speed test",
                        "Check peak usage times",
                        "Discuss business-grade solutions",
                    ],
                ),
            ],
        ),
        (
            "billing".to_string(),
            vec![
                record(
                    "bill_001",
                    "Unexpected Charges",
                    "Business owner finds unexpected equipment charges on their bill",
                    "There's a $200 charge for equipment we never received! This is the \
                     third billing issue in two months!",
                    Difficulty::High,
                    "Medium - Financial impact",
                    &[
                        "Immediate bill review",
                        "Clear explanation of charges",
                        "Quick resolution timeline",
                        "Preventive measures for future",
                    ],
                ),
                record(
                    "bill_002",
                    "Contract Dispute",
                    "Customer disputes automatic renewal terms of business contract",
                    "Nobody told me the contract would auto-renew for two years! We're \
                     opening a new location and need to revise our services.",
                    Difficulty::High,
                    "High - Business expansion affected",
                    &[
                        "Review contract terms",
                        "Explain renewal process",
                        "Discuss business growth options",
                        "Offer contract flexibility",
                    ],
                ),
            ],
        ),
        (
            "support".to_string(),
            vec![
                record(
                    "supp_001",
                    "Response Time",
                    "Business customer waited 48 hours for critical support response",
                    "I've been trying to get help for two days! We're a business customer \
                     paying premium rates for supposedly priority support!",
                    Difficulty::High,
                    "High - Business operations affected",
                    &[
                        "Immediate acknowledgment of delay",
                        "Explain priority support process",
                        "Immediate escalation",
                        "Preventive measures discussion",
                    ],
                ),
                record(
                    "supp_002",
                    "Installation Delay",
                    "New business setup delayed due to installation scheduling",
                    "Our grand opening is in 3 days and the internet still isn't \
                     installed! We can't delay opening our business!",
                    Difficulty::High,
                    "Critical - Business opening affected",
                    &[
                        "Acknowledge critical timeline",
                        "Immediate escalation to field ops",
                        "Provide temporary solution",
                        "Compensation discussion",
                    ],
                ),
            ],
        ),
        (
            "equipment".to_string(),
            vec![record(
                "equip_001",
                "Hardware Malfunction",
                "Business router repeatedly rebooting during peak hours",
                "Our router keeps rebooting during lunch rush! We can't process any card \
                 payments and customers are leaving!",
                Difficulty::Medium,
                "High - Revenue directly affected",
                &[
                    "Immediate technical assessment",
                    "Temporary workaround",
                    "Equipment replacement options",
                    "Business interruption compensation",
                ],
            )],
        ),
    ])
}
