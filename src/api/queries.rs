/// GraphQL documents sent to Open Collective.

/// Contributors with the BACKER role, one page at a time.
pub const ACTIVE_BACKERS: &str = r"
query collective($slug: String, $limit: Int, $offset: Int) {
  collective(slug: $slug) {
    name
    slug
    contributors(roles: BACKER, limit: $limit, offset: $offset) {
      totalCount
      nodes {
        name
        description
        account {
          emails
        }
      }
    }
  }
}
";

/// All tiers defined by a collective.
pub const TIERS: &str = r"
query collective($slug: String) {
  collective(slug: $slug) {
    name
    slug
    tiers {
      totalCount
      nodes {
        name
      }
    }
  }
}
";
