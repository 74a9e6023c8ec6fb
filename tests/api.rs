//! End-to-end tests against a live server.

use reqwest::StatusCode;
use serde_json::{json, Value};
use shop_router::config::AppConfig;

mod common;

fn customer() -> Value {
    json!({
        "email": "jane@example.com",
        "password": "abcdefgh",
        "role": "BASIC",
        "streetAddress": "",
        "streetNumber": "",
    })
}

async fn post_customer(server: &common::TestServer, body: &Value) -> (StatusCode, String) {
    let res = common::client()
        .post(server.url("/customers"))
        .json(body)
        .send()
        .await
        .expect("server unreachable");
    let status = res.status();
    (status, res.text().await.unwrap())
}

#[tokio::test]
async fn test_ping_and_product_lookup() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/ping")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ping");

    for id in ["anything", "42", "%E2%9C%93", "a.b-c_d"] {
        let res = client.get(server.url(&format!("/products/{id}"))).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "id {id}");
        assert_eq!(res.text().await.unwrap(), "hello world");
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_unknown_route() {
    let server = common::start_server().await;
    let res = common::client().get(server.url("/nope")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "404 page not found");

    let res = common::client().delete(server.url("/customers")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_product_auth() {
    let server = common::start_server().await;
    let client = common::client();
    let body = json!({ "id": "42", "name": "x" });

    let res = client.post(server.url("/products")).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.headers()["www-authenticate"],
        "Basic realm=\"Authorization Required\""
    );
    assert_eq!(res.text().await.unwrap(), "");

    let res = client
        .post(server.url("/products"))
        .basic_auth("john", Some("bar"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(server.url("/products"))
        .basic_auth("john", Some("doe"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "42");
}

#[tokio::test]
async fn test_create_product_malformed_body() {
    let server = common::start_server().await;
    let res = common::client()
        .post(server.url("/products"))
        .basic_auth("foo", Some("bar"))
        .body("{\"id\": 42}")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().starts_with("invalid type: integer `42`"));
}

#[tokio::test]
async fn test_configured_accounts_replace_defaults() {
    let mut config = AppConfig::default();
    config.auth.realm = "shop".into();
    config.auth.accounts.clear();
    config.auth.accounts.insert("alice".into(), "wonderland".into());
    let server = common::start_server_with(config).await;
    let client = common::client();
    let body = json!({ "id": "9" });

    let res = client
        .post(server.url("/products"))
        .basic_auth("john", Some("doe"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers()["www-authenticate"], "Basic realm=\"shop\"");

    let res = client
        .post(server.url("/products"))
        .basic_auth("alice", Some("wonderland"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "9");
}

#[tokio::test]
async fn test_customer_round_trip() {
    let server = common::start_server().await;

    let mut body = customer();
    body["role"] = json!("ADMIN");
    body["streetAddress"] = json!("Main St");
    body["streetNumber"] = json!("12");

    let (status, text) = post_customer(&server, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), body);
}

#[tokio::test]
async fn test_customer_absent_street_echoed_empty() {
    let server = common::start_server().await;
    let body = json!({ "email": "jane@example.com", "password": "abcdefgh", "role": "BASIC" });

    let (status, text) = post_customer(&server, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), customer());
}

#[tokio::test]
async fn test_customer_violations() {
    let server = common::start_server().await;

    let cases: Vec<(&str, Value, &str)> = vec![
        ("email", Value::Null, "'Email' failed on the 'required' tag"),
        ("email", json!("jane"), "'Email' failed on the 'email' tag"),
        ("password", json!(""), "'Password' failed on the 'required' tag"),
        ("password", json!("short1"), "'Password' failed on the 'password' tag"),
        ("password", json!("ab cdefgh"), "'Password' failed on the 'password' tag"),
        ("role", json!("OWNER"), "'Role' failed on the 'oneof' tag"),
        ("role", json!("basic"), "'Role' failed on the 'oneof' tag"),
        ("streetAddress", json!("Main St"), "'StreetNumber' failed on the 'required_with' tag"),
    ];

    for (field, value, expected) in cases {
        let mut body = customer();
        if value.is_null() {
            body.as_object_mut().unwrap().remove(field);
        } else {
            body[field] = value;
        }

        let (status, text) = post_customer(&server, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert!(text.contains(expected), "{field}: {text}");
    }
}

#[tokio::test]
async fn test_customer_password_rule() {
    let server = common::start_server().await;

    for password in ["abcdefgh", "ab cdefghij", "!!__secret__!!", "12345678"] {
        let mut body = customer();
        body["password"] = json!(password);
        let (status, text) = post_customer(&server, &body).await;
        assert_eq!(status, StatusCode::OK, "{password}: {text}");
    }
}

#[tokio::test]
async fn test_customer_decode_errors() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/customers"))
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(!res.text().await.unwrap().is_empty());

    let res = client
        .post(server.url("/customers"))
        .json(&json!({ "email": ["jane@example.com"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.text().await.unwrap().contains("invalid type"));
}

#[tokio::test]
async fn test_concurrent_customers() {
    let server = common::start_server().await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..50 {
        let client = client.clone();
        let url = server.url("/customers");
        tasks.push(tokio::spawn(async move {
            let body = json!({
                "email": format!("user{i}@example.com"),
                "password": format!("password{i:04}"),
                "role": if i % 2 == 0 { "BASIC" } else { "ADMIN" },
            });
            let res = client.post(url).json(&body).send().await.unwrap();
            let status = res.status();
            let echoed: Value = res.json().await.unwrap();
            (i, status, echoed)
        }));
    }

    for task in tasks {
        let (i, status, echoed) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(echoed["email"], format!("user{i}@example.com"));
    }
}
