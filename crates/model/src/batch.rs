use serde::{Deserialize, Serialize};

/// Arrays submitted together in one request. Arrays are independent of each
/// other.
pub type Batch = Vec<Vec<i64>>;

/// Arrays each sorted ascending.
///
/// The order of the arrays depends on the strategy that produced them: the
/// sequential strategy keeps input order, the concurrent one yields
/// completion order.
pub type SortedBatch = Vec<Vec<i64>>;

/// Request body of both sort endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SortRequest {
    pub to_sort: Batch,
}

/// Response body of both sort endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SortResponse {
    pub sorted_arrays: SortedBatch,
    pub time_ns: u64,
}

impl SortResponse {
    pub fn new(sorted_arrays: SortedBatch, measurement: crate::Measurement) -> Self {
        SortResponse {
            sorted_arrays,
            time_ns: measurement.as_nanos(),
        }
    }
}

/// Checks that every array is in ascending order.
pub fn is_sorted(batch: &[Vec<i64>]) -> bool {
    batch.iter().all(|array| array.is_sorted())
}

/// Total number of elements across all arrays.
pub fn element_count(batch: &[Vec<i64>]) -> usize {
    batch.iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_decodes_nested_arrays() -> anyhow::Result<()> {
        let request: SortRequest = serde_json::from_str(r#"{"to_sort": [[3, 1, 2], [], [-7]]}"#)?;
        assert_eq!(request.to_sort, vec![vec![3, 1, 2], vec![], vec![-7]]);
        Ok(())
    }

    #[test]
    fn request_ignores_unknown_fields() -> anyhow::Result<()> {
        let request: SortRequest = serde_json::from_str(r#"{"to_sort": [[1]], "extra": true}"#)?;
        assert_eq!(request.to_sort, vec![vec![1]]);
        Ok(())
    }

    #[test]
    fn request_rejects_malformed_payloads() {
        let payloads = [
            r#"{"to_sort": [["a", "b"]]}"#,
            r#"{"to_sort": [[1.5]]}"#,
            r#"{"sort_me": [[1, 2]]}"#,
            r#"{"to_sort": [1, 2]}"#,
            r#"{"to_sort": "#,
        ];
        for payload in payloads {
            let result = serde_json::from_str::<SortRequest>(payload);
            assert!(result.is_err(), "accepted {payload}");
        }
    }

    #[test]
    fn response_encodes_field_names() -> anyhow::Result<()> {
        let response = SortResponse {
            sorted_arrays: vec![vec![1, 2, 3]],
            time_ns: 42,
        };
        let json = serde_json::to_value(&response)?;
        assert_eq!(
            json,
            serde_json::json!({"sorted_arrays": [[1, 2, 3]], "time_ns": 42})
        );
        Ok(())
    }

    #[test]
    fn sortedness_and_counts() {
        assert!(is_sorted(&[vec![], vec![1], vec![1, 1, 2]]));
        assert!(!is_sorted(&[vec![1, 2], vec![2, 1]]));
        assert_eq!(element_count(&[vec![1, 2], vec![], vec![3]]), 3);
    }
}
