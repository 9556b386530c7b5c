use crate::models::NamedRegion;

/// The fixed leading columns of an aggregation table.
pub const REGION_COLUMNS: [&str; 4] = ["chromosome", "start", "end", "label"];

///
/// One region of an aggregation table with one value per profile.
///
/// `values[i]` belongs to the profile labelled `labels[i]` in the owning
/// [`AggregationTable`]; `None` means no interval of that profile overlapped the region.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub region: NamedRegion,
    pub values: Vec<Option<f64>>,
}

impl AggregationResult {
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn has_any(&self) -> bool {
        self.values.iter().any(Option::is_some)
    }
}

///
/// Regions joined with the aggregated value of every profile, in merge order.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationTable {
    /// One label per profile, in column order.
    pub labels: Vec<String>,
    pub rows: Vec<AggregationResult>,
    /// Regions left out because a profile had no value for them.
    pub dropped: usize,
}

impl AggregationTable {
    pub fn new(labels: Vec<String>) -> Self {
        AggregationTable {
            labels,
            rows: Vec::new(),
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `chromosome, start, end, label, value1, value2, ...`
    pub fn column_names(&self) -> Vec<String> {
        REGION_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain((1..=self.labels.len()).map(|i| format!("value{i}")))
            .collect()
    }

    ///
    /// Look up the value of one profile for the row at `row`.
    ///
    /// Returns `None` for an unknown profile label, an out-of-range row, or a missing value.
    pub fn value(&self, row: usize, label: &str) -> Option<f64> {
        let col = self.labels.iter().position(|l| l == label)?;
        self.rows.get(row)?.values.get(col).copied().flatten()
    }
}

///
/// Gene by sample table: one row per gene name, one column per sample.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneTable {
    pub samples: Vec<String>,
    /// Rows ordered by gene name.
    pub rows: Vec<(String, Vec<Option<f64>>)>,
}

impl GeneTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_column_names_and_lookup() {
        let mut table = AggregationTable::new(vec!["acgh".to_string(), "cnvkit".to_string()]);
        table.rows.push(AggregationResult {
            region: NamedRegion::new("chr1", 100, 500, "A").unwrap(),
            values: vec![Some(1.5), None],
        });

        assert_eq!(
            table.column_names(),
            vec!["chromosome", "start", "end", "label", "value1", "value2"]
        );
        assert_eq!(table.value(0, "acgh"), Some(1.5));
        assert_eq!(table.value(0, "cnvkit"), None);
        assert_eq!(table.value(0, "other"), None);
        assert_eq!(table.value(3, "acgh"), None);
        assert!(!table.rows[0].is_complete());
        assert!(table.rows[0].has_any());
    }
}
