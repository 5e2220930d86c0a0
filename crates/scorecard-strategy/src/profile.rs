//! Event profiles and strategy generation

use scorecard_metrics::{CategoryRegistry, MetricCategory, MetricName};
use serde::{Deserialize, Serialize};

/// Primary goal of the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Brand Awareness / Reach
    BrandAwareness,
    /// Audience Engagement / Depth
    AudienceEngagement,
    /// Conversion / Action
    Conversion,
}

impl Objective {
    /// Display label as offered in the wizard
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Objective::BrandAwareness => "Brand Awareness / Reach",
            Objective::AudienceEngagement => "Audience Engagement / Depth",
            Objective::Conversion => "Conversion / Action",
        }
    }

    /// Metric category this objective prioritizes
    #[must_use]
    pub fn focus_category(&self) -> MetricCategory {
        match self {
            Objective::BrandAwareness => MetricCategory::Reach,
            Objective::AudienceEngagement => MetricCategory::Depth,
            Objective::Conversion => MetricCategory::Engagement,
        }
    }
}

/// Scale of the campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignScale {
    /// Major launch
    Major,
    /// Standard beat
    Standard,
    /// Niche / community initiative
    Niche,
}

impl CampaignScale {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CampaignScale::Major => "Major",
            CampaignScale::Standard => "Standard",
            CampaignScale::Niche => "Niche",
        }
    }
}

/// Who the campaign targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAudience {
    /// New customer acquisition
    NewCustomerAcquisition,
    /// Existing customer re-engagement
    ExistingCustomerReengagement,
}

impl TargetAudience {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TargetAudience::NewCustomerAcquisition => "New Customer Acquisition",
            TargetAudience::ExistingCustomerReengagement => "Existing Customer Re-engagement",
        }
    }
}

/// Campaign investment bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentLevel {
    /// Under $50k
    Low,
    /// $50k - $250k
    Medium,
    /// $250k - $1M
    High,
    /// Over $1M
    Major,
}

impl InvestmentLevel {
    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentLevel::Low => "Low (<$50k)",
            InvestmentLevel::Medium => "Medium ($50k - $250k)",
            InvestmentLevel::High => "High ($250k - $1M)",
            InvestmentLevel::Major => "Major (>$1M)",
        }
    }
}

/// Strategic profile of the event being benchmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventProfile {
    /// Primary objective
    pub objective: Objective,
    /// Campaign scale
    pub scale: CampaignScale,
    /// Target audience
    pub audience: TargetAudience,
    /// Investment bracket
    pub investment: InvestmentLevel,
}

/// One prioritized note on picking comparable past events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceNote {
    /// Note heading
    pub title: String,
    /// Note body
    pub text: String,
}

/// Priority assigned to a metric for this event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Directly serves the primary objective
    High,
    /// Worth tracking, secondary to the objective
    Standard,
}

/// A metric with its category and assigned priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPriority {
    /// Metric name
    pub metric: MetricName,
    /// Category from the registry
    pub category: MetricCategory,
    /// Assigned priority
    pub priority: Priority,
}

/// Severity of a strategic consideration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsiderationKind {
    /// Informational
    Info,
    /// Needs attention before benchmarks are trusted
    Warning,
}

/// One strategic consideration surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consideration {
    /// Severity
    pub kind: ConsiderationKind,
    /// Consideration text
    pub text: String,
}

/// Full strategy output for an event profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Description of the ideal comparable past event
    pub ideal_profile_description: String,
    /// Prioritized guidance on selecting comparables
    pub guidance_notes: Vec<GuidanceNote>,
    /// Selected metrics with priorities, in selection order
    pub prioritized_metrics: Vec<MetricPriority>,
    /// Strategic considerations (info and warnings)
    pub strategic_considerations: Vec<Consideration>,
}

/// Generate the strategy profile for an event
///
/// Metrics whose category matches the objective's focus rank High; the rest
/// rank Standard. Metric order follows the selection order.
#[must_use]
pub fn generate_strategy(
    profile: EventProfile,
    metrics: &[MetricName],
    categories: &CategoryRegistry,
) -> StrategyProfile {
    let ideal_profile_description = format!(
        "Based on your inputs, you should look for past events that were also \
         '{}' scale, focused on '{}', with a primary objective of '{}'.",
        profile.scale.label(),
        profile.audience.label(),
        profile.objective.label(),
    );

    let guidance_notes = vec![
        GuidanceNote {
            title: "Priority #1: Match by Objective".to_string(),
            text: "The goal of the campaign is the most important factor. An 'Awareness' \
                   campaign will have fundamentally different results from a 'Conversion' \
                   campaign. Ensure the past events you choose had the same primary objective."
                .to_string(),
        },
        GuidanceNote {
            title: "Priority #2: Match by Scale & Investment".to_string(),
            text: "A 'Major' multi-million dollar launch is not comparable to a 'Niche' \
                   community initiative. Comparing events of a similar scale is critical for \
                   a credible benchmark."
                .to_string(),
        },
        GuidanceNote {
            title: "Priority #3: Match by Target Audience".to_string(),
            text: "Campaigns targeting new users ('Acquisition') often have lower conversion \
                   rates but higher reach than campaigns targeting existing fans \
                   ('Re-engagement'). Choose past events that had a similar audience focus."
                .to_string(),
        },
    ];

    let focus = profile.objective.focus_category();
    let prioritized_metrics = metrics
        .iter()
        .map(|metric| {
            let category = categories.category_for(metric);
            let priority = if category == focus {
                Priority::High
            } else {
                Priority::Standard
            };
            MetricPriority {
                metric: metric.clone(),
                category,
                priority,
            }
        })
        .collect();

    let strategic_considerations = considerations(profile, metrics, categories, focus);

    StrategyProfile {
        ideal_profile_description,
        guidance_notes,
        prioritized_metrics,
        strategic_considerations,
    }
}

fn considerations(
    profile: EventProfile,
    metrics: &[MetricName],
    categories: &CategoryRegistry,
    focus: MetricCategory,
) -> Vec<Consideration> {
    let mut out = Vec::new();

    if profile.scale == CampaignScale::Niche && profile.investment >= InvestmentLevel::High {
        out.push(Consideration {
            kind: ConsiderationKind::Warning,
            text: "A high investment level on a niche-scale campaign is unusual; past niche \
                   events may understate what this budget can reach."
                .to_string(),
        });
    }
    if profile.scale == CampaignScale::Major && profile.investment == InvestmentLevel::Low {
        out.push(Consideration {
            kind: ConsiderationKind::Warning,
            text: "A major-scale campaign with low investment is unlikely to match past major \
                   launches; consider benchmarking against standard-scale events instead."
                .to_string(),
        });
    }

    let covers_focus = metrics.iter().any(|m| categories.category_for(m) == focus);
    if !covers_focus && !metrics.is_empty() {
        out.push(Consideration {
            kind: ConsiderationKind::Warning,
            text: format!(
                "None of your selected metrics fall in the '{focus}' category, which is the \
                 focus of your primary objective."
            ),
        });
    }

    out.push(Consideration {
        kind: ConsiderationKind::Info,
        text: match profile.audience {
            TargetAudience::NewCustomerAcquisition => {
                "Acquisition campaigns typically trade conversion rate for reach; expect wider \
                 but shallower numbers than re-engagement beats."
                    .to_string()
            }
            TargetAudience::ExistingCustomerReengagement => {
                "Re-engagement campaigns typically convert better on a smaller audience; \
                 benchmark against past events with an existing-fan focus."
                    .to_string()
            }
        },
    });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile() -> EventProfile {
        EventProfile {
            objective: Objective::Conversion,
            scale: CampaignScale::Standard,
            audience: TargetAudience::ExistingCustomerReengagement,
            investment: InvestmentLevel::Medium,
        }
    }

    #[test]
    fn description_embeds_all_three_axes() {
        let strategy = generate_strategy(profile(), &[], &CategoryRegistry::builtin());
        let desc = &strategy.ideal_profile_description;
        assert!(desc.contains("'Standard' scale"));
        assert!(desc.contains("'Existing Customer Re-engagement'"));
        assert!(desc.contains("'Conversion / Action'"));
    }

    #[test]
    fn three_guidance_notes_in_priority_order() {
        let strategy = generate_strategy(profile(), &[], &CategoryRegistry::builtin());
        assert_eq!(strategy.guidance_notes.len(), 3);
        assert!(strategy.guidance_notes[0].title.contains("Objective"));
        assert!(strategy.guidance_notes[1].title.contains("Scale"));
        assert!(strategy.guidance_notes[2].title.contains("Audience"));
    }

    #[test]
    fn focus_category_metrics_rank_high() {
        let metrics = vec![
            MetricName::from("DAU"),                // Engagement
            MetricName::from("Nb. press articles"), // Reach
        ];
        let strategy = generate_strategy(profile(), &metrics, &CategoryRegistry::builtin());

        assert_eq!(strategy.prioritized_metrics[0].priority, Priority::High);
        assert_eq!(strategy.prioritized_metrics[1].priority, Priority::Standard);
        // Order follows the selection order
        assert_eq!(strategy.prioritized_metrics[0].metric.as_str(), "DAU");
    }

    #[test]
    fn mismatched_scale_and_investment_warns() {
        let p = EventProfile {
            scale: CampaignScale::Niche,
            investment: InvestmentLevel::Major,
            ..profile()
        };
        let strategy = generate_strategy(p, &[], &CategoryRegistry::builtin());
        assert!(strategy
            .strategic_considerations
            .iter()
            .any(|c| c.kind == ConsiderationKind::Warning));
    }

    #[test]
    fn missing_focus_coverage_warns() {
        // Conversion focus, but only Reach metrics selected
        let metrics = vec![MetricName::from("Nb. press articles")];
        let strategy = generate_strategy(profile(), &metrics, &CategoryRegistry::builtin());
        assert!(strategy
            .strategic_considerations
            .iter()
            .any(|c| c.kind == ConsiderationKind::Warning && c.text.contains("Engagement")));
    }

    #[test]
    fn always_emits_an_audience_info_note() {
        let strategy = generate_strategy(profile(), &[], &CategoryRegistry::builtin());
        assert!(strategy
            .strategic_considerations
            .iter()
            .any(|c| c.kind == ConsiderationKind::Info));
    }

    #[test]
    fn strategy_serde_round_trip() {
        let metrics = vec![MetricName::from("DAU")];
        let strategy = generate_strategy(profile(), &metrics, &CategoryRegistry::builtin());
        let json = serde_json::to_string(&strategy).unwrap();
        let back: StrategyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, strategy);
    }
}
