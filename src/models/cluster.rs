//! The closed set of event cities.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// A geographic cluster hosting the event.
///
/// The event runs in exactly three cities. Cluster membership is validated
/// at the boundary; once a value has parsed into this enum the engine never
/// sees an out-of-set city.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Cluster;
///
/// let cluster: Cluster = "Nellore".parse().unwrap();
/// assert_eq!(cluster, Cluster::Nellore);
/// assert!("Guntur".parse::<Cluster>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    /// Vijayawada cluster.
    Vijayawada,
    /// Nellore cluster.
    Nellore,
    /// Visakhapatnam cluster.
    Visakhapatnam,
}

impl Cluster {
    /// All clusters in their fixed display order.
    ///
    /// Cluster summaries are always reported in this order, one entry per
    /// cluster, even when a cluster has no employees.
    pub const ALL: [Cluster; 3] = [
        Cluster::Vijayawada,
        Cluster::Nellore,
        Cluster::Visakhapatnam,
    ];

    /// Returns the city name as used on the wire and in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Vijayawada => "Vijayawada",
            Cluster::Nellore => "Nellore",
            Cluster::Visakhapatnam => "Visakhapatnam",
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Vijayawada" => Ok(Cluster::Vijayawada),
            "Nellore" => Ok(Cluster::Nellore),
            "Visakhapatnam" => Ok(Cluster::Visakhapatnam),
            other => Err(EngineError::UnknownCluster {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_cluster_once() {
        assert_eq!(Cluster::ALL.len(), 3);
        assert_eq!(Cluster::ALL[0], Cluster::Vijayawada);
        assert_eq!(Cluster::ALL[1], Cluster::Nellore);
        assert_eq!(Cluster::ALL[2], Cluster::Visakhapatnam);
    }

    #[test]
    fn test_serialization_uses_city_name() {
        assert_eq!(
            serde_json::to_string(&Cluster::Vijayawada).unwrap(),
            "\"Vijayawada\""
        );
        assert_eq!(
            serde_json::to_string(&Cluster::Visakhapatnam).unwrap(),
            "\"Visakhapatnam\""
        );
    }

    #[test]
    fn test_parse_valid_cluster() {
        assert_eq!("Nellore".parse::<Cluster>().unwrap(), Cluster::Nellore);
    }

    #[test]
    fn test_parse_unknown_cluster_fails() {
        let err = "Guntur".parse::<Cluster>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown cluster: Guntur");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("nellore".parse::<Cluster>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for cluster in Cluster::ALL {
            assert_eq!(cluster.to_string().parse::<Cluster>().unwrap(), cluster);
        }
    }
}
