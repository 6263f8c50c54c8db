/// Paginated retrieval of a collective's active backers.
use serde::Deserialize;
use serde_json::json;

use super::errors::ApiError;
use super::queries::ACTIVE_BACKERS;
use super::transport::{Transport, run_query};
use crate::backers::Backer;

/// Contributors requested per page.
pub const PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct Data {
    collective: Option<Collective>,
}

#[derive(Debug, Deserialize)]
struct Collective {
    contributors: Page,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page {
    total_count: usize,
    #[serde(default)]
    nodes: Vec<ContributorNode>,
}

#[derive(Debug, Deserialize)]
struct ContributorNode {
    name: Option<String>,
    description: Option<String>,
    account: Option<Account>,
}

#[derive(Debug, Deserialize)]
struct Account {
    emails: Option<Vec<String>>,
}

impl From<ContributorNode> for Backer {
    fn from(node: ContributorNode) -> Self {
        Backer {
            name: node.name.unwrap_or_default(),
            tier_description: node.description.unwrap_or_default(),
            emails: node.account.and_then(|a| a.emails).unwrap_or_default(),
        }
    }
}

/// Accumulator for the page fold.
#[derive(Debug, Default)]
struct Accumulated {
    backers: Vec<Backer>,
    offset: usize,
}

impl Accumulated {
    fn is_complete(&self, total_count: usize) -> bool {
        self.backers.len() >= total_count
    }
}

fn fetch_page<T: Transport + ?Sized>(
    transport: &T,
    org_slug: &str,
    offset: usize,
) -> Result<Page, ApiError> {
    let variables = json!({ "slug": org_slug, "limit": PAGE_SIZE, "offset": offset });
    let data: Data = run_query(transport, ACTIVE_BACKERS, variables)?;
    data.collective
        .map(|c| c.contributors)
        .ok_or_else(|| ApiError::OrganizationNotFound {
            slug: org_slug.to_owned(),
        })
}

/// Fetch every backer of `org_slug` that belongs to a tier.
///
/// Pages are requested sequentially, `PAGE_SIZE` at a time, until the
/// accumulated count reaches the server's `totalCount`. Backers with an empty
/// tier description (one-time donors and the like) are dropped afterwards;
/// server order is kept.
///
/// # Errors
///
/// Any `ApiError` from the transport, or `OrganizationNotFound`.
pub fn fetch_active_backers<T: Transport + ?Sized>(
    transport: &T,
    org_slug: &str,
) -> Result<Vec<Backer>, ApiError> {
    let mut acc = Accumulated::default();
    loop {
        let page = fetch_page(transport, org_slug, acc.offset)?;
        let received = page.nodes.len();
        acc.backers.extend(page.nodes.into_iter().map(Backer::from));
        tracing::debug!(
            offset = acc.offset,
            received,
            accumulated = acc.backers.len(),
            total = page.total_count,
            "fetched backer page"
        );

        if acc.is_complete(page.total_count) {
            break;
        }
        if received == 0 {
            tracing::warn!(
                accumulated = acc.backers.len(),
                total = page.total_count,
                "server returned an empty page before totalCount was reached"
            );
            break;
        }
        acc.offset += PAGE_SIZE;
    }

    acc.backers.retain(|b| !b.tier_description.is_empty());
    Ok(acc.backers)
}
