//! Blocking HTTP client for the GitHub GraphQL and REST APIs.

use super::types::{
    CommitCountData, ContributorStats, GraphQlRequest, GraphQlResponse, Repository, UserIdData,
    UserSummary, UserSummaryData, ViewerData,
};
use crate::stats::schema::{GithubStats, LineStats};
use crate::utils::config::{
    CONTRIBUTOR_STATS_ATTEMPTS, CONTRIBUTOR_STATS_RETRY_DELAY, DEFAULT_HTTP_TIMEOUT,
    REPOS_PER_PAGE, USER_AGENT,
};
use crate::utils::error::FetchError;
use log::{debug, info, warn};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, USER_AGENT as USER_AGENT_HEADER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

const VIEWER_QUERY: &str = "query { viewer { login } }";

const USER_ID_QUERY: &str = "query($login: String!) { user(login: $login) { id } }";

const USER_SUMMARY_QUERY: &str = r#"
query($login: String!) {
    user(login: $login) {
        repositories(first: 100, ownerAffiliations: [OWNER, COLLABORATOR, ORGANIZATION_MEMBER]) {
            totalCount
            nodes { stargazerCount }
        }
        followers { totalCount }
        following { totalCount }
        repositoriesContributedTo(first: 0, contributionTypes: [COMMIT, PULL_REQUEST]) { totalCount }
        pullRequests(first: 0) { totalCount }
        issues(first: 0) { totalCount }
    }
}
"#;

const COMMIT_COUNT_QUERY: &str = r#"
query($owner: String!, $name: String!, $authorId: ID!) {
    repository(owner: $owner, name: $name) {
        defaultBranchRef {
            target {
                ... on Commit {
                    history(first: 0, author: {id: $authorId}) { totalCount }
                }
            }
        }
    }
}
"#;

/// Repositories counted towards commit totals
pub const COMMIT_AFFILIATION: &str = "owner,collaborator,organization_member";

/// Repositories counted towards line totals
pub const LOC_AFFILIATION: &str = "owner";

/// GitHub API client
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    /// Create a new client against `api_url` (e.g. `https://api.github.com`)
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(FetchError::RequestFailed)?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Collect every GitHub number on the card
    ///
    /// `login` defaults to the account that owns the token.
    pub fn fetch_stats(&self, login: Option<&str>) -> Result<GithubStats, FetchError> {
        let login = match login {
            Some(login) => login.to_string(),
            None => self.viewer_login()?,
        };

        info!("Fetching GitHub stats for {}", login);

        let summary = self.user_summary(&login)?;
        let mut stats = summarize(&summary);

        stats.commits = self.total_commits(&login)?;

        let lines = self.total_lines(&login)?;
        stats.loc_added = lines.added;
        stats.loc_deleted = lines.deleted;
        stats.loc_total = lines.net();

        debug!("GitHub stats: {:?}", stats);
        Ok(stats)
    }

    /// Login of the token's owner
    pub fn viewer_login(&self) -> Result<String, FetchError> {
        let data: ViewerData = self.graphql(VIEWER_QUERY, serde_json::json!({}))?;
        Ok(data.viewer.login)
    }

    pub fn user_summary(&self, login: &str) -> Result<UserSummary, FetchError> {
        let data: UserSummaryData =
            self.graphql(USER_SUMMARY_QUERY, serde_json::json!({ "login": login }))?;

        data.user
            .ok_or_else(|| FetchError::InvalidResponse(format!("User not found: {}", login)))
    }

    pub fn user_id(&self, login: &str) -> Result<String, FetchError> {
        let data: UserIdData =
            self.graphql(USER_ID_QUERY, serde_json::json!({ "login": login }))?;

        data.user
            .map(|user| user.id)
            .ok_or_else(|| FetchError::InvalidResponse(format!("User not found: {}", login)))
    }

    /// All repositories visible to the token with the given affiliation
    pub fn list_repositories(&self, affiliation: &str) -> Result<Vec<Repository>, FetchError> {
        let mut repos = Vec::new();

        for page in 1.. {
            let url = format!(
                "{}/user/repos?per_page={}&page={}&affiliation={}",
                self.api_url, REPOS_PER_PAGE, page, affiliation
            );
            let batch: Vec<Repository> = self.get_json(&url)?;
            let last_page = batch.len() < REPOS_PER_PAGE;
            repos.extend(batch);

            if last_page {
                break;
            }
        }

        debug!("Listed {} repositories ({})", repos.len(), affiliation);
        Ok(repos)
    }

    /// Commits authored by `author_id` on a repository's default branch
    pub fn commit_count(
        &self,
        owner: &str,
        name: &str,
        author_id: &str,
    ) -> Result<u64, FetchError> {
        let data: CommitCountData = self.graphql(
            COMMIT_COUNT_QUERY,
            serde_json::json!({ "owner": owner, "name": name, "authorId": author_id }),
        )?;
        Ok(data.total())
    }

    /// Per-contributor weekly line counts
    ///
    /// Returns `None` when GitHub is still computing the stats after all
    /// attempts; the caller skips the repository in that case.
    pub fn contributor_stats(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Option<Vec<ContributorStats>>, FetchError> {
        let url = format!("{}/repos/{}/{}/stats/contributors", self.api_url, owner, name);

        for attempt in 1..=CONTRIBUTOR_STATS_ATTEMPTS {
            let response = self.authorized(self.client.get(&url)).send()?;

            match response.status() {
                StatusCode::ACCEPTED => {
                    debug!(
                        "Contributor stats for {}/{} not ready (attempt {})",
                        owner, name, attempt
                    );
                    std::thread::sleep(CONTRIBUTOR_STATS_RETRY_DELAY);
                }
                StatusCode::NO_CONTENT => return Ok(Some(Vec::new())),
                status if status.is_success() => return Ok(Some(response.json()?)),
                status => {
                    return Err(FetchError::Api {
                        status: status.as_u16(),
                        body: response.text().unwrap_or_default(),
                    })
                }
            }
        }

        warn!("Skipping {}/{}: contributor stats still being computed", owner, name);
        Ok(None)
    }

    fn total_commits(&self, login: &str) -> Result<u64, FetchError> {
        let author_id = self.user_id(login)?;
        let repos = self.list_repositories(COMMIT_AFFILIATION)?;

        let mut total = 0;
        for repo in &repos {
            total += self.commit_count(&repo.owner.login, &repo.name, &author_id)?;
        }

        debug!("{} commits across {} repositories", total, repos.len());
        Ok(total)
    }

    fn total_lines(&self, login: &str) -> Result<LineStats, FetchError> {
        let repos = self.list_repositories(LOC_AFFILIATION)?;

        let mut total = LineStats::default();
        for repo in repos.iter().filter(|repo| !repo.fork) {
            if let Some(contributors) = self.contributor_stats(&repo.owner.login, &repo.name)? {
                let lines = lines_for_author(&contributors, login);
                total.added += lines.added;
                total.deleted += lines.deleted;
            }
        }

        Ok(total)
    }

    fn graphql<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<T, FetchError> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .authorized(self.client.post(format!("{}/graphql", self.api_url)))
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(FetchError::Api {
                status: response.status().as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: GraphQlResponse<T> = response.json()?;
        extract_data(body)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self.authorized(self.client.get(url)).send()?;

        if !response.status().is_success() {
            return Err(FetchError::Api {
                status: response.status().as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        Ok(response.json()?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(USER_AGENT_HEADER, USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
    }
}

/// Unwrap a GraphQL envelope, surfacing reported errors
pub fn extract_data<T>(response: GraphQlResponse<T>) -> Result<T, FetchError> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(FetchError::GraphQl(messages.join("; ")));
    }

    response
        .data
        .ok_or_else(|| FetchError::InvalidResponse("Missing data field".to_string()))
}

/// Account totals that come straight from the summary query
pub fn summarize(summary: &UserSummary) -> GithubStats {
    let stars = summary
        .repositories
        .nodes
        .iter()
        .flatten()
        .map(|node| node.stargazer_count)
        .sum();

    GithubStats {
        repos: summary.repositories.total_count,
        stars,
        followers: summary.followers.total_count,
        following: summary.following.total_count,
        contributed_repos: summary.repositories_contributed_to.total_count,
        prs: summary.pull_requests.total_count,
        issues: summary.issues.total_count,
        ..Default::default()
    }
}

/// Sum the weekly additions/deletions of `login` (case-insensitive)
pub fn lines_for_author(contributors: &[ContributorStats], login: &str) -> LineStats {
    contributors
        .iter()
        .find(|contrib| {
            contrib
                .author
                .as_ref()
                .is_some_and(|author| author.login.eq_ignore_ascii_case(login))
        })
        .map(|contrib| LineStats {
            added: contrib.weeks.iter().map(|week| week.a).sum(),
            deleted: contrib.weeks.iter().map(|week| week.d).sum(),
        })
        .unwrap_or_default()
}
