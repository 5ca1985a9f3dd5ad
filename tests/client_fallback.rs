use couplet::{Couplet, CoupletClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn returns_service_couplet() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/generate"))
        .and(query_param("prompt", "金龙 贺岁"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "上联": "金龙腾飞辞旧岁",
            "下联": "玉兔欢跃迎新春",
            "横批": "万象更新",
            "总结": "新"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CoupletClient::new(server.uri());
    let couplet = client.generate("金龙 贺岁").await;
    assert_eq!(couplet.upper, "金龙腾飞辞旧岁");
    assert_eq!(couplet.summary, "新");
}

#[tokio::test]
async fn server_error_falls_back_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(json!({ "error": "generation_failed" })),
        )
        .mount(&server)
        .await;

    let client = CoupletClient::new(format!("{}/", server.uri()));
    assert!(client.try_generate("x").await.is_err());

    let couplet = client.generate("x").await;
    assert_eq!(
        serde_json::to_value(&couplet).unwrap(),
        json!({ "上联": "网络断线心慌慌", "下联": "请求失败意茫茫", "横批": "网事难成", "总结": "寄" })
    );
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = CoupletClient::new(format!("http://127.0.0.1:{port}"));
    assert_eq!(client.generate("").await, Couplet::fallback());
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "上联": "只有一半" })))
        .mount(&server)
        .await;

    let client = CoupletClient::new(server.uri());
    assert_eq!(client.generate("x").await, Couplet::fallback());
}
