//! Metric calculation results.

/// One computed metric for one category group.
///
/// `index` is the rendered group key: "Jan" for a month group, "3" for an
/// hour group, "2019-08-01" for a date group, "0" for the total bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    pub category: String,
    pub metric: String,
    pub index: String,
    pub value: f64,
}

/// All metric values computed for one processed pair.
///
/// Results compare by value, so identical inputs produce equal results and
/// can be used for regression comparison. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricResult {
    pub name: String,
    pub forecast_id: String,
    pub observation_id: String,
    pub values: Vec<MetricValue>,
}

impl MetricResult {
    /// Iterate over the values computed for one category.
    pub fn values_for_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a MetricValue> {
        self.values.iter().filter(move |v| v.category == category)
    }
}
