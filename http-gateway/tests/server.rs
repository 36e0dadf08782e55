use ed25519_dalek::{Signer, SigningKey};
use http_gateway::http::Server;
use http_gateway::{handlers, Config};
use interactions::{
    Arguments, Command, CommandInteraction, Gateway, Registry, RestClient, Runner, Verifier,
    SIGNATURE_HEADER, TIMESTAMP_HEADER,
};
use model::Snowflake;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{sleep, timeout};
use warp::http::StatusCode;

const TIMESTAMP: &str = "1700000000";

fn server(key: &SigningKey) -> Arc<Server> {
    server_with(key, handlers::registry().unwrap())
}

fn server_with(key: &SigningKey, registry: Registry) -> Arc<Server> {
    let config = Config {
        server_addr: "127.0.0.1:0".to_owned(),
        public_key: hex::encode(key.verifying_key().as_bytes()),
        application_id: Snowflake(200),
        bot_token: "token".to_owned(),
        owner_id: None,
        // Nothing listens here; REST calls fail fast.
        api_base: "http://127.0.0.1:1".to_owned(),
        sentry_dsn: None,
        json_log: false,
    };

    let verifier = Verifier::from_hex(&config.public_key).unwrap();
    let api = Arc::new(RestClient::new(&config.api_base, &config.bot_token).unwrap());

    Arc::new(Server::new(config, Gateway::new(verifier, Arc::new(registry), api)))
}

fn sign(key: &SigningKey, body: &str) -> String {
    let mut message = TIMESTAMP.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    hex::encode(key.sign(&message).to_bytes())
}

fn command(name: &str) -> String {
    json!({
        "id": "100",
        "application_id": "200",
        "type": 2,
        "token": "interaction-token",
        "channel_id": "30",
        "user": {"id": "2", "username": "someone"},
        "data": {"id": "300", "name": name, "type": 1}
    })
    .to_string()
}

#[tokio::test]
async fn ping_is_answered() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let server = server(&key);
    let body = json!({"id": "1", "application_id": "200", "type": 1}).to_string();

    let res = warp::test::request()
        .method("POST")
        .path("/interactions")
        .header(SIGNATURE_HEADER, sign(&key, &body))
        .header(TIMESTAMP_HEADER, TIMESTAMP)
        .body(body)
        .reply(&Arc::clone(&server).filter_handle())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let json: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(json, json!({"type": 1}));
}

#[tokio::test]
async fn unsigned_requests_are_rejected() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let server = server(&key);

    let res = warp::test::request()
        .method("POST")
        .path("/interactions")
        .body(command("ping"))
        .reply(&Arc::clone(&server).filter_handle())
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(&res.body()[..], b"Bad request signature");
}

#[tokio::test]
async fn owner_only_without_owner_is_denied() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let server = server(&key);
    let body = command("say");

    let res = warp::test::request()
        .method("POST")
        .path("/interactions")
        .header(SIGNATURE_HEADER, sign(&key, &body))
        .header(TIMESTAMP_HEADER, TIMESTAMP)
        .body(body)
        .reply(&Arc::clone(&server).filter_handle())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(json["data"]["content"], interactions::OWNER_ONLY_MESSAGE);
}

/// A registry whose only command counts how often its deferred callback ran.
fn counting_registry(calls: Arc<AtomicUsize>) -> Registry {
    let command = Command::new(
        "count",
        "Counts deferred runs",
        Runner::deferred_reply(move |_: CommandInteraction, _: Arguments| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(())
            }
        }),
    );

    Registry::build(vec![command], vec![], vec![]).unwrap()
}

async fn read_until(stream: &mut TcpStream, needle: &str) -> String {
    let mut received = Vec::new();
    let mut buf = [0u8; 1024];

    while !String::from_utf8_lossy(&received).contains(needle) {
        let n = stream.read(&mut buf).await.unwrap();
        assert_ne!(n, 0, "connection closed before the response arrived");
        received.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&received).into_owned()
}

#[tokio::test]
async fn deferred_job_runs_once_over_a_kept_alive_connection() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let calls = Arc::new(AtomicUsize::new(0));
    let server = server_with(&key, counting_registry(Arc::clone(&calls)));

    let (address, serving) =
        warp::serve(Arc::clone(&server).filter_handle()).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(serving);

    let body = command("count");
    let request = format!(
        "POST /interactions HTTP/1.1\r\nHost: {address}\r\nContent-Type: application/json\r\n\
         {SIGNATURE_HEADER}: {}\r\n{TIMESTAMP_HEADER}: {TIMESTAMP}\r\nContent-Length: {}\r\n\r\n{body}",
        sign(&key, &body),
        body.len(),
    );

    let mut stream = TcpStream::connect(address).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let response = timeout(Duration::from_secs(5), read_until(&mut stream, "\"type\":5"))
        .await
        .unwrap();
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{}", response);

    // The connection stays open; the job must not wait for it to close.
    timeout(Duration::from_secs(5), async {
        while calls.load(Ordering::SeqCst) == 0 {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    server.tasks.drain().await;
    assert!(server.tasks.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    drop(stream);
}

#[tokio::test]
async fn deferred_job_is_tracked_until_drained() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let calls = Arc::new(AtomicUsize::new(0));
    let server = server_with(&key, counting_registry(Arc::clone(&calls)));
    let body = command("count");

    let res = warp::test::request()
        .method("POST")
        .path("/interactions")
        .header(SIGNATURE_HEADER, sign(&key, &body))
        .header(TIMESTAMP_HEADER, TIMESTAMP)
        .body(body)
        .reply(&Arc::clone(&server).filter_handle())
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(json, json!({"type": 5, "data": {}}));
    assert_eq!(server.tasks.len(), 1);

    server.tasks.drain().await;
    assert!(server.tasks.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unknown_routes_are_not_handled() {
    let key = SigningKey::from_bytes(&[9u8; 32]);
    let server = server(&key);

    let res = warp::test::request()
        .method("POST")
        .path("/handle/1")
        .body(command("ping"))
        .reply(&Arc::clone(&server).filter_handle())
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
