use micro_packet::protocol::{Authentication, Body, HttpMessage, HttpResponse};
use serde_json::json;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let message = match HttpMessage::builder()
        .method("post")
        .url("http://127.0.0.1:8080/api/login?redirect=/home")
        .header("Accept", "application/json")
        .header("UserAgent", "micro-packet")
        .auth(Authentication::bearer("secret-token"))
        .body(Body::Json(json!({"user": "ferris", "remember": true})))
        .build()
    {
        Ok(message) => message,
        Err(e) => {
            error!(cause = %e, "invalid request parameters");
            return;
        }
    };

    match message.generate() {
        Ok(request) => info!("generated request:\n{request}"),
        Err(e) => error!(cause = %e, "failed to generate request"),
    }

    let raw_response = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nSet-Cookie: sid=1\r\n\r\n{\"ok\":true}";
    match HttpResponse::parse(raw_response) {
        Ok(response) => info!(
            version = response.version(),
            code = response.status().code,
            description = %response.status().description,
            headers = ?response.headers(),
            body = response.body(),
            "parsed response"
        ),
        Err(e) => error!(cause = %e, "failed to parse response"),
    }
}
