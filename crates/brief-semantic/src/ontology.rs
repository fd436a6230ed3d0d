use std::collections::HashMap;

use tracing::debug;

use brief_core::errors::{BriefError, BriefResult};
use brief_core::metrics::{MarketingMetric, MetricUnit};

/// Canonical metric registry with alias resolution.
///
/// Built once at startup and passed by reference. Lookups are
/// case-insensitive and whitespace-trimmed; nothing here touches
/// global state.
#[derive(Debug, Clone)]
pub struct MetricOntology {
    metrics: HashMap<String, MarketingMetric>,
    /// Lowercased alias (including the canonical spelling itself) to
    /// canonical name.
    aliases: HashMap<String, String>,
}

impl MetricOntology {
    /// The built-in registry: CAC, LTV, ROAS, CTR, Conversion Rate.
    pub fn builtin() -> Self {
        let mut ontology = Self::empty();
        // The built-in set is curated; names cannot collide.
        for metric in builtin_metrics() {
            ontology.index(metric);
        }
        ontology
    }

    /// Build a custom registry. Canonical names must be unique.
    pub fn new<I>(metrics: I) -> BriefResult<Self>
    where
        I: IntoIterator<Item = MarketingMetric>,
    {
        let mut ontology = Self::empty();
        for metric in metrics {
            if ontology.metrics.contains_key(&metric.name) {
                return Err(BriefError::DuplicateMetric { name: metric.name });
            }
            ontology.index(metric);
        }
        Ok(ontology)
    }

    fn empty() -> Self {
        Self {
            metrics: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    fn index(&mut self, metric: MarketingMetric) {
        self.aliases
            .insert(metric.name.to_lowercase(), metric.name.clone());
        for alias in &metric.aliases {
            self.aliases
                .insert(alias.to_lowercase(), metric.name.clone());
        }
        self.metrics.insert(metric.name.clone(), metric);
    }

    /// Canonical name for an alias or canonical spelling.
    pub fn get_canonical_name(&self, alias: &str) -> BriefResult<&str> {
        let key = alias.trim().to_lowercase();
        match self.aliases.get(&key) {
            Some(canonical) => Ok(canonical),
            None => {
                debug!(alias, "metric alias not registered");
                Err(BriefError::UnknownMetric {
                    alias: alias.to_string(),
                })
            }
        }
    }

    /// Full definition for an alias or canonical name.
    pub fn get_metric(&self, alias: &str) -> BriefResult<&MarketingMetric> {
        let canonical = self.get_canonical_name(alias)?;
        match self.metrics.get(canonical) {
            Some(metric) => Ok(metric),
            None => Err(BriefError::UnknownMetric {
                alias: alias.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// All canonical definitions, in unspecified order.
    pub fn metrics(&self) -> impl Iterator<Item = &MarketingMetric> {
        self.metrics.values()
    }
}

impl Default for MetricOntology {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_metrics() -> Vec<MarketingMetric> {
    vec![
        MarketingMetric::new(
            "CAC",
            "Customer Acquisition Cost: The total cost to acquire a new customer, \
             including marketing and sales expenses.",
        )
        .with_formula("Total Marketing & Sales Spend / Number of New Customers")
        .with_aliases(["customer acquisition cost", "acquisition cost"])
        .with_unit(MetricUnit::Dollars),
        MarketingMetric::new(
            "LTV",
            "Lifetime Value: The predicted net profit attributed to the entire \
             future relationship with a customer.",
        )
        .with_formula("Average Revenue per Customer * Gross Margin * Customer Lifespan")
        .with_aliases(["lifetime value", "customer lifetime value", "ltv"])
        .with_unit(MetricUnit::Dollars),
        MarketingMetric::new(
            "ROAS",
            "Return on Ad Spend: Revenue generated for every dollar spent on advertising.",
        )
        .with_formula("Revenue from Ads / Ad Spend")
        .with_aliases(["return on ad spend", "roas"])
        .with_unit(MetricUnit::Ratio)
        .ratio(),
        MarketingMetric::new(
            "CTR",
            "Click-Through Rate: The percentage of people who clicked an ad or link \
             out of total impressions.",
        )
        .with_formula("(Clicks / Impressions) * 100")
        .with_aliases(["click through rate", "ctr"])
        .with_unit(MetricUnit::Percent)
        .ratio(),
        MarketingMetric::new(
            "Conversion Rate",
            "The percentage of users who take a desired action (e.g., purchase, \
             signup) out of total visitors.",
        )
        .with_formula("(Conversions / Visitors) * 100")
        .with_aliases(["conversion rate", "cr"])
        .with_unit(MetricUnit::Percent)
        .ratio(),
    ]
}
