//! Types for GitHub GraphQL and REST payloads.
//!
//! Only the fields the stats card needs are modelled; everything else in
//! the responses is ignored by serde.

use serde::{Deserialize, Serialize};

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error object
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `{ totalCount }` connection
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Count {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct UserIdData {
    pub user: Option<UserId>,
}

#[derive(Debug, Deserialize)]
pub struct UserId {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserSummaryData {
    pub user: Option<UserSummary>,
}

/// Account totals from a single GraphQL round trip
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub repositories: RepositoryConnection,
    pub followers: Count,
    pub following: Count,
    pub repositories_contributed_to: Count,
    pub pull_requests: Count,
    pub issues: Count,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Vec<Option<StarNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarNode {
    pub stargazer_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct CommitCountData {
    pub repository: Option<CommitCountRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitCountRepository {
    pub default_branch_ref: Option<BranchRef>,
}

#[derive(Debug, Deserialize)]
pub struct BranchRef {
    pub target: Option<CommitTarget>,
}

#[derive(Debug, Deserialize)]
pub struct CommitTarget {
    #[serde(default)]
    pub history: Option<Count>,
}

impl CommitCountData {
    /// Commit count on the default branch, zero for empty repositories
    pub fn total(&self) -> u64 {
        self.repository
            .as_ref()
            .and_then(|repo| repo.default_branch_ref.as_ref())
            .and_then(|branch| branch.target.as_ref())
            .and_then(|target| target.history)
            .map(|history| history.total_count)
            .unwrap_or(0)
    }
}

/// Entry of `GET /user/repos`
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Entry of `GET /repos/{owner}/{repo}/stats/contributors`
#[derive(Debug, Clone, Deserialize)]
pub struct ContributorStats {
    pub author: Option<Owner>,
    #[serde(default)]
    pub weeks: Vec<WeeklyLines>,
}

/// One week of additions (`a`) and deletions (`d`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeeklyLines {
    #[serde(default)]
    pub a: u64,
    #[serde(default)]
    pub d: u64,
}
