/// Tier catalog retrieval.
use serde::Deserialize;
use serde_json::json;

use super::errors::ApiError;
use super::queries::TIERS;
use super::transport::{Transport, run_query};

#[derive(Debug, Deserialize)]
struct Data {
    collective: Option<Collective>,
}

#[derive(Debug, Deserialize)]
struct Collective {
    tiers: TierList,
}

#[derive(Debug, Deserialize)]
struct TierList {
    #[serde(default)]
    nodes: Vec<TierNode>,
}

#[derive(Debug, Deserialize)]
struct TierNode {
    name: String,
}

/// Fetch the names of every tier `org_slug` defines, in server order.
///
/// One request, no pagination.
///
/// # Errors
///
/// Any `ApiError` from the transport, or `OrganizationNotFound`.
pub fn fetch_tiers<T: Transport + ?Sized>(
    transport: &T,
    org_slug: &str,
) -> Result<Vec<String>, ApiError> {
    let data: Data = run_query(transport, TIERS, json!({ "slug": org_slug }))?;
    let collective = data.collective.ok_or_else(|| ApiError::OrganizationNotFound {
        slug: org_slug.to_owned(),
    })?;
    Ok(collective.tiers.nodes.into_iter().map(|t| t.name).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::transport::testing::ScriptedTransport;

    #[test]
    fn test_tier_names_in_server_order() {
        let transport = ScriptedTransport::new(vec![Ok(json!({
            "collective": {
                "name": "Solus",
                "slug": "getsolus",
                "tiers": { "totalCount": 2, "nodes": [{ "name": "Silver" }, { "name": "Gold Star" }] }
            }
        }))]);
        let tiers = fetch_tiers(&transport, "getsolus").unwrap();
        assert_eq!(tiers, vec!["Silver", "Gold Star"]);
        assert_eq!(transport.call_count(), 1);
        assert_eq!(transport.calls.borrow()[0], json!({ "slug": "getsolus" }));
    }

    #[test]
    fn test_no_tiers() {
        let transport = ScriptedTransport::new(vec![Ok(json!({
            "collective": { "tiers": { "totalCount": 0, "nodes": [] } }
        }))]);
        assert!(fetch_tiers(&transport, "getsolus").unwrap().is_empty());
    }

    #[test]
    fn test_query_error_propagates() {
        let transport = ScriptedTransport::new(vec![Err(ApiError::Query {
            message: "Cannot query field".to_owned(),
        })]);
        assert!(matches!(
            fetch_tiers(&transport, "getsolus"),
            Err(ApiError::Query { .. })
        ));
    }
}
