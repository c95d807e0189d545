use serde_json::json;
use std::sync::Arc;
use tome_scraper::apis::donjon::DonjonClient;
use tome_scraper::pipeline::fetch_all;
use tome_scraper::types::SpellApi;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn donjon_body(name: &str, description: &str) -> serde_json::Value {
    json!({
        "Name": name,
        "Level": "1st",
        "Source": "phb 257",
        "School": "Evocation",
        "Ritual": "no",
        "Class": ["Sorcerer", "Wizard"],
        "Casting Time": "1 Action",
        "Range": "120 feet",
        "Duration": "Instantaneous",
        "Concentration": "no",
        "Components": "V,S",
        "Description": description
    })
}

fn name_query(expected: &'static str) -> impl Fn(&Request) -> bool {
    move |request: &Request| request.url.query() == Some(expected)
}

#[tokio::test]
async fn fetches_and_parses_a_spell() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rpc.cgi"))
        .and(name_query("name=Magic+Missile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(donjon_body("Magic Missile", "You create three glowing darts.")),
        )
        .mount(&server)
        .await;

    let client = DonjonClient::with_base_url(format!("{}/rpc.cgi", server.uri()));
    let spell = client.get_spell("Magic Missile").await.unwrap();

    assert_eq!(spell.name, "Magic Missile");
    assert_eq!(spell.source, "phb 257");
    assert_eq!(spell.casting_time, "1 Action");
    assert_eq!(spell.class, vec!["Sorcerer", "Wizard"]);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    // Nothing mounted, so every request gets the mock server's 404.
    let server = MockServer::start().await;
    let client = DonjonClient::with_base_url(format!("{}/rpc.cgi", server.uri()));

    let err = client.get_spell("Unknown Spell").await.unwrap_err();
    assert!(err.to_string().contains("404"), "unexpected error: {err}");
}

#[tokio::test]
async fn missing_optional_fields_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rpc.cgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Name": "Mystery Spell"})))
        .mount(&server)
        .await;

    let client = DonjonClient::with_base_url(format!("{}/rpc.cgi", server.uri()));
    let spell = client.get_spell("Mystery Spell").await.unwrap();

    assert_eq!(spell.name, "Mystery Spell");
    assert_eq!(spell.level, "");
    assert!(spell.class.is_empty());
    assert_eq!(spell.description, None);
}

#[tokio::test]
async fn batch_over_http_reports_partial_results() {
    let server = MockServer::start().await;
    for name in ["Shield", "Fly"] {
        let query: &'static str = Box::leak(format!("name={name}").into_boxed_str());
        Mock::given(method("GET"))
            .and(path("/rpc.cgi"))
            .and(name_query(query))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(donjon_body(name, "A spell.")),
            )
            .mount(&server)
            .await;
    }

    let api: Arc<dyn SpellApi> = Arc::new(DonjonClient::with_base_url(format!(
        "{}/rpc.cgi",
        server.uri()
    )));
    let names: Vec<String> = ["Shield", "Not A Spell", "Fly"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let result = fetch_all(api, &names).await;

    assert_eq!(result.total, 3);
    assert_eq!(result.fetched, 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Not A Spell"));
}
