//! Criterion micro-benchmarks for observation routing.

use criterion::{criterion_group, criterion_main, Criterion};

use parley_core::{PlayerId, Recipient, Sender, TurnId};
use parley_obs::Router;

/// Benchmark: broadcast fan-out to eight mailboxes.
fn bench_broadcast_8p(c: &mut Criterion) {
    let mut router = Router::new(8);
    c.bench_function("router_broadcast_8p", |b| {
        b.iter(|| {
            router
                .send(
                    Sender::System,
                    Recipient::Broadcast,
                    "round update",
                    false,
                    TurnId(0),
                )
                .unwrap();
            for id in 0..8u32 {
                std::hint::black_box(router.drain(PlayerId(id)));
            }
        });
    });
}

/// Benchmark: private delivery and drain for one recipient.
fn bench_private_send_drain(c: &mut Criterion) {
    let mut router = Router::new(2);
    c.bench_function("router_private_send_drain", |b| {
        b.iter(|| {
            router
                .send(
                    Sender::Player(PlayerId(0)),
                    Recipient::Player(PlayerId(1)),
                    "[A0 B0]",
                    false,
                    TurnId(3),
                )
                .unwrap();
            std::hint::black_box(router.drain(PlayerId(1)));
        });
    });
}

criterion_group!(benches, bench_broadcast_8p, bench_private_send_drain);
criterion_main!(benches);
