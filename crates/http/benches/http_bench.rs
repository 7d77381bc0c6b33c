use bytes::BytesMut;
use criterion::{Criterion, criterion_group, criterion_main};
use micro_packet::codec::{RequestEncoder, ResponseDecoder};
use micro_packet::protocol::{Authentication, Body, HttpMessage};
use serde_json::json;
use std::hint::black_box;
use tokio_util::codec::{Decoder, Encoder};

fn bench_request_encoder(c: &mut Criterion) {
    let message = HttpMessage::builder()
        .method("post")
        .url("http://localhost:8080/api/items?page=1")
        .header("Accept", "*/*")
        .auth(Authentication::basic("user", "password"))
        .body(Body::Json(json!({"name": "item", "count": 3})))
        .build()
        .unwrap();

    c.bench_function("encode_simple_request", |b| {
        b.iter(|| {
            let mut encoder = RequestEncoder::new();
            let mut bytes = BytesMut::new();
            black_box(encoder.encode(&message, &mut bytes).unwrap());
        });
    });
}

fn bench_response_decoder(c: &mut Criterion) {
    let response = b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 12\r\n\r\nHello World!";

    c.bench_function("decode_simple_response", |b| {
        b.iter(|| {
            let mut decoder = ResponseDecoder::new();
            let mut bytes = BytesMut::from(&response[..]);
            black_box(decoder.decode_eof(&mut bytes).unwrap());
        });
    });
}

criterion_group!(benches, bench_request_encoder, bench_response_decoder);
criterion_main!(benches);
