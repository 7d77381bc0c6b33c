use std::hint::black_box;
use bencher::{FixtureGroup, ResponseFixture};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_packet::codec::ResponseDecoder;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

static SMALL_RESPONSE: ResponseFixture =
    ResponseFixture::new("small_response_decoder", FixtureGroup::Small, include_str!("../resources/response/ok_small.txt"));
static LARGE_RESPONSE: ResponseFixture =
    ResponseFixture::new("large_response_decoder", FixtureGroup::Large, include_str!("../resources/response/ok_large.txt"));

fn benchmark_response_decoder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("response_decoder");

    for fixture in [SMALL_RESPONSE, LARGE_RESPONSE] {
        group.throughput(Throughput::Bytes(fixture.content().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fixture.name()), &fixture, |b, fixture| {
            let mut response_decoder = ResponseDecoder::new();
            b.iter_batched_ref(
                || BytesMut::from(fixture.content()),
                |bytes_mut| {
                    let response = response_decoder.decode_eof(bytes_mut).expect("input should be a valid http response").unwrap();
                    black_box(response);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(decoder, benchmark_response_decoder);
criterion_main!(decoder);
