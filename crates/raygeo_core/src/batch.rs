//! Batch solving of independent ray queries.
//!
//! Each query carries all of its own state, so queries are evaluated in
//! parallel with rayon and reported back in input order.

use rayon::prelude::*;
use raygeo_math::{Ray, Vector3};
use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::error::SolveResult;
use crate::solver::{Intersection, Root};

/// One ray to intersect, as read from JSON (`[x, y, z]` arrays, km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayQuery {
    pub direction: Vector3,
    pub origin: Vector3,
}

impl RayQuery {
    pub fn ray(&self) -> Ray {
        Ray::new(self.origin, self.direction)
    }
}

/// Reportable result of a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Hit { point: Vector3, t: f64, root: Root },
    NoIntersection,
    Error { message: String },
}

impl From<SolveResult<Option<Intersection>>> for Outcome {
    fn from(result: SolveResult<Option<Intersection>>) -> Self {
        match result {
            Ok(Some(hit)) => Outcome::Hit {
                point: hit.point,
                t: hit.t,
                root: hit.root,
            },
            Ok(None) => Outcome::NoIntersection,
            Err(e) => Outcome::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Solve every query against `ellipsoid`.
///
/// The returned outcomes line up index for index with `queries`.
pub fn solve_batch(ellipsoid: &Ellipsoid, queries: &[RayQuery]) -> Vec<Outcome> {
    let outcomes: Vec<Outcome> = queries
        .par_iter()
        .map(|q| Outcome::from(ellipsoid.intersect(&q.ray())))
        .collect();

    let hits = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Hit { .. }))
        .count();
    let errors = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Error { .. }))
        .count();
    log::info!(
        "Solved {} queries: {} hits, {} misses, {} errors",
        outcomes.len(),
        hits,
        outcomes.len() - hits - errors,
        errors
    );

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::solve;

    fn query(direction: [f64; 3], origin: [f64; 3]) -> RayQuery {
        RayQuery {
            direction: Vector3::from_array(direction),
            origin: Vector3::from_array(origin),
        }
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_errors() {
        let queries = vec![
            query([1.0, 0.0, 0.0], [0.0, 0.0, 100000.0]),
            query([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            query([0.0, 0.0, -1.0], [0.0, 0.0, 10000.0]),
        ];

        let outcomes = solve_batch(&Ellipsoid::REFERENCE, &queries);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], Outcome::NoIntersection);
        assert_eq!(
            outcomes[1],
            Outcome::Error {
                message: SolveError::DegenerateDirection.to_string()
            }
        );
        let expected = solve(queries[2].direction, queries[2].origin);
        assert_eq!(outcomes[2], Outcome::from(expected));
    }

    #[test]
    fn test_batch_empty() {
        assert!(solve_batch(&Ellipsoid::REFERENCE, &[]).is_empty());
    }

    #[test]
    fn test_query_from_json() {
        let json = r#"[{"direction": [0, 0, -1], "origin": [0, 0, 10000]}]"#;
        let queries: Vec<RayQuery> = serde_json::from_str(json).unwrap();

        assert_eq!(queries, vec![query([0.0, 0.0, -1.0], [0.0, 0.0, 10000.0])]);
    }

    #[test]
    fn test_outcome_json_shape() {
        let miss = serde_json::to_value(Outcome::NoIntersection).unwrap();
        assert_eq!(miss, serde_json::json!({"status": "no_intersection"}));

        let hit = Outcome::Hit {
            point: Vector3::new(1.0, 2.0, 3.0),
            t: 0.5,
            root: Root::Near,
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "hit",
                "point": [1.0, 2.0, 3.0],
                "t": 0.5,
                "root": "near"
            })
        );
    }
}
