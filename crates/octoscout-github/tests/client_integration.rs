use mockito::Matcher;
use serde_json::json;

use octoscout_github::GitHubClient;

fn test_client(server: &mockito::ServerGuard) -> GitHubClient {
    GitHubClient::with_base_uri("test_token".to_string(), &server.url())
        .expect("client should build against mock server")
}

fn search_body(total: u64, logins: impl IntoIterator<Item = String>) -> String {
    let items: Vec<_> = logins
        .into_iter()
        .enumerate()
        .map(|(i, login)| json!({"login": login, "id": i as u64 + 1}))
        .collect();
    json!({
        "total_count": total,
        "incomplete_results": false,
        "items": items
    })
    .to_string()
}

#[tokio::test]
async fn search_stream_walks_pages_until_total_count() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    let page1 = server
        .mock("GET", "/search/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "location:Singapore followers:>100".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(150, (0..100).map(|i| format!("user{i}"))))
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/search/users")
        .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
            "page".into(),
            "2".into(),
        )]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(150, (100..150).map(|i| format!("user{i}"))))
        .create_async()
        .await;

    let mut stream = client.search_users("location:Singapore followers:>100");
    let mut logins = Vec::new();
    while let Some(user) = stream.try_next().await.unwrap() {
        logins.push(user.login);
    }

    assert_eq!(logins.len(), 150);
    assert_eq!(logins.first().map(String::as_str), Some("user0"));
    assert_eq!(logins.last().map(String::as_str), Some("user149"));
    assert_eq!(stream.total_count(), Some(150));
    page1.assert_async().await;
    page2.assert_async().await;
}

#[tokio::test]
async fn search_stream_handles_zero_matches() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    server
        .mock("GET", "/search/users")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body(0, std::iter::empty()))
        .create_async()
        .await;

    let mut stream = client.search_users("location:Nowhere followers:>100");
    assert!(stream.try_next().await.unwrap().is_none());
    assert_eq!(stream.total_count(), Some(0));
}

#[tokio::test]
async fn repo_stream_ends_on_short_page() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    let repos: Vec<_> = (0..3)
        .map(|i| json!({"full_name": format!("octocat/repo{i}")}))
        .collect();
    server
        .mock("GET", "/users/octocat/repos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "pushed".into()),
            Matcher::UrlEncoded("direction".into(), "desc".into()),
            Matcher::UrlEncoded("type".into(), "all".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!(repos).to_string())
        .create_async()
        .await;

    let mut stream = client.user_repos("octocat");
    let mut names = Vec::new();
    while let Some(item) = stream.try_next().await.unwrap() {
        names.push(item["full_name"].as_str().unwrap().to_string());
    }

    assert_eq!(names, vec!["octocat/repo0", "octocat/repo1", "octocat/repo2"]);
}

#[tokio::test]
async fn forbidden_response_classifies_as_rate_limited() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    server
        .mock("GET", "/search/users")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "API rate limit exceeded for user.",
                "documentation_url": "https://docs.github.com/rest/rate-limit"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut stream = client.search_users("location:Singapore followers:>100");
    let err = stream.try_next().await.unwrap_err();
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn missing_user_is_item_level() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    server
        .mock("GET", "/users/gone")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client.user("gone").await.unwrap_err();
    assert!(err.is_item_level());
    assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn rate_limit_endpoint_reports_core_and_search() {
    let mut server = mockito::Server::new_async().await;
    let client = test_client(&server);

    server
        .mock("GET", "/rate_limit")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "resources": {
                    "core": {"limit": 5000, "used": 12, "remaining": 4988, "reset": 1700000000u64},
                    "search": {"limit": 30, "used": 1, "remaining": 29, "reset": 1700000000u64}
                },
                "rate": {"limit": 5000, "used": 12, "remaining": 4988, "reset": 1700000000u64}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let limits = client.rate_limit().await.unwrap();
    assert_eq!(limits.core.limit, 5000);
    assert_eq!(limits.core.remaining, 4988);
    assert_eq!(limits.search.limit, 30);
    assert_eq!(limits.search.reset_at().timestamp(), 1_700_000_000);
}
