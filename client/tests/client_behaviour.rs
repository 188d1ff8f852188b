//! Behaviour tests for the assembled client: auth header lifecycle, the
//! fail-soft list contract, and page-snapshot immutability.

use std::sync::Arc;

use client::Courtside;
use client::domain::auth::LoginCredentials;
use client::domain::error::ApiError;
use client::domain::resources::TeamFilters;
use client::models::NewTeam;
use pagination::PageNumber;
use rstest::{fixture, rstest};
use url::Url;

mod support;

use support::{MemoryTokenStore, StubTransport};

const GRANT: &str =
    r#"{"token":"tok-live","user_id":7,"username":"ada","email":"ada@example.net"}"#;

const TEAMS_PAGE_TWO: &str = r#"{
    "results": [
        {"id": 21, "name": "Hawks", "abbreviation": "ATL", "city": "Atlanta",
         "conference": "Eastern", "division": "Southeast", "logo": null},
        {"id": 22, "name": "Bulls", "abbreviation": "CHI", "city": "Chicago",
         "conference": "Eastern", "division": "Central", "logo": null}
    ],
    "count": 45,
    "next": "http://127.0.0.1:8000/api/teams/?page=3",
    "previous": "http://127.0.0.1:8000/api/teams/?page=1"
}"#;

struct Harness {
    transport: Arc<StubTransport>,
    store: Arc<MemoryTokenStore>,
    client: Courtside,
}

fn harness_with_store(store: MemoryTokenStore) -> Harness {
    let transport = Arc::new(StubTransport::new());
    let store = Arc::new(store);
    let client = Courtside::new(
        Arc::clone(&transport) as Arc<dyn client::domain::ports::ApiTransport>,
        Url::parse("http://127.0.0.1:8000/api/").expect("valid base URL"),
        Arc::clone(&store) as Arc<dyn client::domain::ports::TokenStore>,
    )
    .expect("client should assemble");
    Harness {
        transport,
        store,
        client,
    }
}

#[fixture]
fn harness() -> Harness {
    harness_with_store(MemoryTokenStore::default())
}

fn credentials() -> LoginCredentials {
    LoginCredentials::try_from_parts("ada", "pw").expect("valid credentials")
}

#[rstest]
#[tokio::test]
async fn auth_header_follows_the_session_lifecycle(harness: Harness) {
    harness.transport.push(200, GRANT);

    harness
        .client
        .auth()
        .login(&credentials())
        .await
        .expect("login succeeds");
    assert_eq!(harness.store.persisted().as_deref(), Some("tok-live"));

    let _ = harness
        .client
        .teams(&TeamFilters::default(), PageNumber::FIRST)
        .await;
    harness.client.auth().logout();
    assert_eq!(harness.store.persisted(), None);
    let _ = harness
        .client
        .teams(&TeamFilters::default(), PageNumber::FIRST)
        .await;

    let requests = harness.transport.requests();
    assert_eq!(requests.len(), 3, "login plus two list fetches");
    assert_eq!(requests[0].auth_token, None, "login itself is anonymous");
    assert_eq!(
        requests[1].auth_token.as_deref(),
        Some("tok-live"),
        "authenticated list fetch carries the token"
    );
    assert_eq!(
        requests[2].auth_token, None,
        "after logout the header is absent"
    );
}

#[rstest]
#[tokio::test]
async fn restored_session_presents_token_before_verification() {
    let restored = harness_with_store(MemoryTokenStore::holding("tok-old"));

    assert!(restored.client.auth().restore());
    let _ = restored
        .client
        .teams(&TeamFilters::default(), PageNumber::FIRST)
        .await;

    let requests = restored.transport.requests();
    assert_eq!(requests[0].auth_token.as_deref(), Some("tok-old"));
}

#[rstest]
#[tokio::test]
async fn middle_page_maps_navigation_and_survives_logout(harness: Harness) {
    harness.transport.push(200, GRANT);
    harness.transport.push(200, TEAMS_PAGE_TWO);

    harness
        .client
        .auth()
        .login(&credentials())
        .await
        .expect("login succeeds");
    let page = harness
        .client
        .teams(
            &TeamFilters::default(),
            PageNumber::new(2).expect("valid page"),
        )
        .await;

    assert_eq!(page.current_page().get(), 2);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_count(), 45);
    assert!(page.has_previous());
    assert!(page.has_next());

    // The page is a snapshot: tearing the session down must not touch it.
    let before = page.clone();
    harness.client.auth().logout();
    assert_eq!(page, before);
    assert_eq!(page.items()[1].name, "Bulls");
}

#[rstest]
#[tokio::test]
async fn empty_collection_has_inert_navigation(harness: Harness) {
    harness.transport.push(
        200,
        r#"{"results":[],"count":0,"next":null,"previous":null}"#,
    );

    let page = harness
        .client
        .teams(&TeamFilters::default(), PageNumber::FIRST)
        .await;
    assert!(page.is_empty());
    assert!(!page.has_previous());
    assert!(!page.has_next());
}

#[rstest]
#[tokio::test]
async fn failing_list_read_degrades_to_an_empty_page(harness: Harness) {
    harness.transport.push(500, r#"{"detail":"exploded"}"#);

    let page = harness
        .client
        .teams(&TeamFilters::default(), PageNumber::FIRST)
        .await;
    assert_eq!(page.total_count(), 0);
    assert!(page.is_empty());
}

#[rstest]
#[tokio::test]
async fn failing_write_propagates_and_leaves_snapshots_alone(harness: Harness) {
    harness.transport.push(200, TEAMS_PAGE_TWO);
    let page = harness
        .client
        .teams(
            &TeamFilters::default(),
            PageNumber::new(2).expect("valid page"),
        )
        .await;
    let before = page.clone();

    harness.transport.push(400, r#"{"name":["already exists"]}"#);
    let error = harness
        .client
        .create_team(&NewTeam {
            name: "Hawks".to_owned(),
            abbreviation: "ATL".to_owned(),
            city: "Atlanta".to_owned(),
            conference: "Eastern".to_owned(),
            division: "Southeast".to_owned(),
            logo: None,
        })
        .await
        .expect_err("400 must propagate");

    assert!(matches!(error, ApiError::Malformed { status: Some(400), .. }));
    assert_eq!(page, before, "failed write must not disturb loaded pages");
}

#[rstest]
#[tokio::test]
async fn filters_reach_the_wire_only_when_meaningful(harness: Harness) {
    let filters = TeamFilters {
        conference: Some("Eastern".to_owned()),
        division: Some(String::new()),
        search: None,
    };
    let _ = harness.client.teams(&filters, PageNumber::FIRST).await;

    let requests = harness.transport.requests();
    assert_eq!(
        requests[0].url.as_str(),
        "http://127.0.0.1:8000/api/teams/?conference=Eastern&page=1"
    );
}
