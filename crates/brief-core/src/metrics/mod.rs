pub mod definition;
pub mod normalized;
pub mod raw;
pub mod value;

pub use definition::{MarketingMetric, MetricUnit};
pub use normalized::{MetricCategory, NormalizedMetric, NormalizedMetrics};
pub use raw::{HeadlineMetric, RawMetrics};
pub use value::MetricValue;
