use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use shared::{
    domain::{Article, ArticleId, WebinarId},
    protocol::{ContactSubmission, WebinarRegistration},
};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use crate::{
    config::DEFAULT_COUNTRY_CODE,
    display::{article_cards, format_published_date, NO_ARTICLES_PLACEHOLDER},
    error::FetchError,
    normalize_phone, SiteClient,
};

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn hello_article_json() -> Value {
    json!({
        "id": 1,
        "title": "Hello",
        "slug": "hello",
        "created_at": "2025-01-01"
    })
}

#[derive(Clone, Copy)]
enum Envelope {
    Plain,
    Results,
    Data,
}

async fn handle_articles(State(shape): State<Envelope>) -> Json<Value> {
    let items = json!([hello_article_json()]);
    Json(match shape {
        Envelope::Plain => items,
        Envelope::Results => json!({ "results": items }),
        Envelope::Data => json!({ "data": items }),
    })
}

#[tokio::test]
async fn list_normalization_accepts_every_envelope_shape() {
    for shape in [Envelope::Plain, Envelope::Results, Envelope::Data] {
        let app = Router::new()
            .route("/articles/", get(handle_articles))
            .with_state(shape);
        let server_url = spawn_server(app).await;
        let client = SiteClient::new(server_url).expect("client");

        let articles = client.list_articles().await.expect("articles");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[0].slug, "hello");
    }
}

#[tokio::test]
async fn article_listing_end_to_end_renders_one_card_with_long_date() {
    let app = Router::new().route(
        "/articles/",
        get(|| async { Json(json!([hello_article_json()])) }),
    );
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let articles = client.list_articles().await.expect("articles");
    let cards = article_cards(&articles);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Hello");
    assert_eq!(cards[0].published, "January 1, 2025");
}

#[tokio::test]
async fn empty_article_list_is_a_legitimate_empty_state() {
    let app = Router::new().route("/articles/", get(|| async { Json(json!([])) }));
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let articles = client.list_articles().await.expect("articles");
    assert!(articles.is_empty());
    assert!(article_cards(&articles).is_empty());
    // Pages render placeholder copy for this case, not an error state.
    assert_eq!(NO_ARTICLES_PLACEHOLDER, "No Articles Found");
}

#[test]
fn long_date_format_spells_out_month_without_zero_padding() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
    assert_eq!(format_published_date(date), "January 1, 2025");

    let article = Article {
        id: ArticleId(9),
        title: "Year in review".into(),
        slug: "year-in-review".into(),
        content: String::new(),
        image: None,
        created_at: NaiveDate::from_ymd_opt(2024, 12, 31).expect("date"),
    };
    assert_eq!(article_cards(&[article])[0].published, "December 31, 2024");
}

#[tokio::test]
async fn missing_detail_slug_maps_to_not_found() {
    let app = Router::new().route("/services/:slug/", get(|| async { StatusCode::NOT_FOUND }));
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let err = client.service_detail("missing").await.expect_err("404");
    match err {
        FetchError::NotFound { entity, slug } => {
            assert_eq!(entity, "service");
            assert_eq!(slug, "missing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_failure_maps_to_http_status() {
    let app = Router::new().route(
        "/projects/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let err = client.list_projects().await.expect_err("500");
    match err {
        FetchError::Http { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn refused_connection_maps_to_network_error() {
    // Bind to learn a free port, then drop the listener before connecting.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = SiteClient::new(format!("http://{addr}")).expect("client");
    let err = client.list_articles().await.expect_err("refused");
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

#[test]
fn rejects_unparseable_base_url() {
    let err = SiteClient::new("not a url").expect_err("invalid base");
    assert!(matches!(
        err,
        FetchError::Validation {
            field: "base_url",
            ..
        }
    ));
}

#[derive(Clone)]
struct ContactCapture {
    tx: Arc<Mutex<Option<oneshot::Sender<ContactSubmission>>>>,
}

async fn handle_contact(
    State(state): State<ContactCapture>,
    Json(body): Json<ContactSubmission>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(body);
    }
    Json(json!({ "detail": "received" }))
}

async fn spawn_contact_server() -> (String, oneshot::Receiver<ContactSubmission>) {
    let (tx, rx) = oneshot::channel();
    let state = ContactCapture {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/contact/client/", post(handle_contact))
        .with_state(state);
    (spawn_server(app).await, rx)
}

fn contact_form() -> ContactSubmission {
    ContactSubmission {
        name: "Amna".into(),
        email: "amna@example.com".into(),
        phone: "3001234567".into(),
        project_timeline: "2-4 weeks".into(),
        message: "Project inquiry".into(),
    }
}

#[tokio::test]
async fn contact_submission_normalizes_phone_with_default_country_code() {
    let (server_url, payload_rx) = spawn_contact_server().await;
    let client = SiteClient::new(server_url).expect("client");

    let ack = client.submit_contact(&contact_form()).await.expect("ack");
    assert_eq!(ack.detail.as_deref(), Some("received"));

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload.phone, format!("{DEFAULT_COUNTRY_CODE}3001234567"));
    assert_eq!(payload.name, "Amna");
}

#[tokio::test]
async fn contact_validation_rejects_before_any_request() {
    let (server_url, mut payload_rx) = spawn_contact_server().await;
    let client = SiteClient::new(server_url).expect("client");

    let mut form = contact_form();
    form.message.clear();
    let err = client.submit_contact(&form).await.expect_err("invalid");
    assert!(matches!(
        err,
        FetchError::Validation {
            field: "message",
            ..
        }
    ));

    let mut form = contact_form();
    form.project_timeline = "Custom".into();
    let err = client.submit_contact(&form).await.expect_err("placeholder");
    assert!(matches!(
        err,
        FetchError::Validation {
            field: "project_timeline",
            ..
        }
    ));

    // Nothing reached the backend; the capture channel is still pending.
    assert!(payload_rx.try_recv().is_err());
}

#[tokio::test]
async fn rejected_submission_surfaces_backend_message_inline() {
    let app = Router::new().route(
        "/contact/client/",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "code": "validation", "message": "phone already in use" })),
            )
                .into_response()
        }),
    );
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let err = client
        .submit_contact(&contact_form())
        .await
        .expect_err("rejected");
    assert_eq!(err.inline_message(), "phone already in use");
    match err {
        FetchError::Http { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some("phone already in use"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[derive(Clone)]
struct RegistrationCapture {
    tx: Arc<Mutex<Option<oneshot::Sender<WebinarRegistration>>>>,
}

async fn handle_registration(
    State(state): State<RegistrationCapture>,
    Json(body): Json<WebinarRegistration>,
) -> Json<Value> {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(body);
    }
    Json(json!({ "detail": "registered" }))
}

#[tokio::test]
async fn webinar_registration_posts_to_the_historical_path() {
    let (tx, rx) = oneshot::channel();
    let state = RegistrationCapture {
        tx: Arc::new(Mutex::new(Some(tx))),
    };
    let app = Router::new()
        .route("/Webnar-register/", post(handle_registration))
        .with_state(state);
    let server_url = spawn_server(app).await;
    let client = SiteClient::new(server_url).expect("client");

    let registration = WebinarRegistration {
        username: "sam".into(),
        email: "sam@example.com".into(),
        phone_number: "+923001112223".into(),
        webinar: WebinarId(42),
    };
    let ack = client
        .register_for_webinar(&registration)
        .await
        .expect("ack");
    assert_eq!(ack.detail.as_deref(), Some("registered"));

    let payload = rx.await.expect("payload");
    assert_eq!(payload.webinar, WebinarId(42));
    assert_eq!(payload.username, "sam");
}

#[test]
fn phone_numbers_with_explicit_country_code_pass_through() {
    assert_eq!(normalize_phone("+447700900000", "+92"), "+447700900000");
    assert_eq!(normalize_phone("  3001234567 ", "+92"), "+923001234567");
}
