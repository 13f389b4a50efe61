use std::{io::Write, sync::Arc};

use anyhow::Context;
use clap::Parser;
use log::info;

use github_repos_loader::{
    DEFAULT_REPOSITORIES_PER_PAGE, GITHUB_REST_ENDPOINT, Repository, RepositoryCrawler,
    RestFetcher, SequentialCrawler, StdResult, Username,
};

/// Fetches the list of a GitHub user's repositories
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Username of a GitHub user
    #[arg(allow_hyphen_values = true)]
    username: Username,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    info!("Fetching repositories of <{}>", args.username);

    let crawler = build_sequential_crawler(GITHUB_REST_ENDPOINT)?;
    load_repositories(crawler.as_ref(), &args.username, &mut std::io::stdout().lock()).await
}

fn build_sequential_crawler(endpoint: &str) -> StdResult<Arc<dyn RepositoryCrawler>> {
    let fetcher = Arc::new(RestFetcher::try_new(endpoint)?);

    Ok(Arc::new(SequentialCrawler::new(
        fetcher,
        DEFAULT_REPOSITORIES_PER_PAGE,
    )))
}

/// Crawls all the repositories of the user, then writes their names.
///
/// Nothing is written unless every page was fetched.
async fn load_repositories(
    crawler: &dyn RepositoryCrawler,
    username: &Username,
    out: &mut impl Write,
) -> StdResult<()> {
    let repositories = crawler
        .crawl(username)
        .await
        .with_context(|| format!("Failed to fetch the repositories of <{username}>"))?;
    print_repositories(out, &repositories)?;

    Ok(())
}

fn print_repositories(out: &mut impl Write, repositories: &[Repository]) -> std::io::Result<()> {
    for repository in repositories {
        writeln!(out, "{}", repository.name())?;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use serde_json::{Value, json};

    use super::*;

    fn octocat() -> Username {
        "octocat".parse().unwrap()
    }

    fn repositories_json(range: std::ops::Range<usize>) -> Value {
        Value::Array(
            range
                .map(|index| json!({"name": format!("repository-{index}")}))
                .collect(),
        )
    }

    fn expected_output(range: std::ops::Range<usize>) -> String {
        range.map(|index| format!("repository-{index}\n")).collect()
    }

    #[test]
    fn prints_one_name_per_line_in_order() {
        let repositories = vec![
            Repository::new("zeta"),
            Repository::new("alpha"),
            Repository::new("Hello-World"),
        ];
        let mut out = Vec::new();

        print_repositories(&mut out, &repositories).unwrap();

        assert_eq!("zeta\nalpha\nHello-World\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn prints_nothing_without_repositories() {
        let mut out = Vec::new();

        print_repositories(&mut out, &[]).unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn loads_and_prints_all_pages() {
        let server = MockServer::start();
        let page1 = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .query_param("page", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(repositories_json(0..100));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .query_param("page", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(repositories_json(100..150));
        });
        let crawler = build_sequential_crawler(&server.base_url()).unwrap();
        let mut out = Vec::new();

        load_repositories(crawler.as_ref(), &octocat(), &mut out)
            .await
            .unwrap();

        page1.assert_hits(1);
        page2.assert_hits(1);
        assert_eq!(expected_output(0..150), String::from_utf8(out).unwrap());
    }

    #[tokio::test]
    async fn prints_nothing_when_a_page_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .query_param("page", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(repositories_json(0..100));
        });
        let page2 = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octocat/repos")
                .query_param("page", "2");
            then.status(503);
        });
        let crawler = build_sequential_crawler(&server.base_url()).unwrap();
        let mut out = Vec::new();

        let error = load_repositories(crawler.as_ref(), &octocat(), &mut out)
            .await
            .expect_err("Loading should fail when a page is unavailable");

        page2.assert_hits(1);
        assert!(out.is_empty());
        assert!(
            error
                .to_string()
                .contains("Failed to fetch the repositories of <octocat>")
        );
    }

    #[test]
    fn parses_username_starting_with_hyphen_as_value() {
        let error = Args::try_parse_from(["github-repos-loader", "-abc"]).unwrap_err();

        assert_eq!(clap::error::ErrorKind::ValueValidation, error.kind());
    }

    #[test]
    fn parses_valid_username() {
        let args = Args::try_parse_from(["github-repos-loader", "octocat"]).unwrap();

        assert_eq!(octocat(), args.username);
    }
}
