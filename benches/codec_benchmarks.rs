use alloy_primitives::{Address, B256, U256};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use stgcodec::{
    AddressValue, BigIntValue, MemorySlots, ProposerRecord, StorageValue, StructuredStorage,
    UInt64Value,
};

const BATCH_SIZE: usize = 10_000;

fn generate_address(rng: &mut StdRng, leading_zeros: usize) -> Address {
    let mut bytes: [u8; 20] = rng.gen();
    bytes[..leading_zeros].fill(0);
    Address::from(bytes)
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mut rng = StdRng::seed_from_u64(42);

    let counters: Vec<_> = (0..BATCH_SIZE).map(|_| UInt64Value(rng.gen())).collect();
    group.bench_function("uint64", |b| {
        b.iter(|| {
            for value in &counters {
                black_box(value.encode().unwrap());
            }
        })
    });

    let balances: Vec<_> = (0..BATCH_SIZE)
        .map(|_| BigIntValue::from(U256::from_be_bytes(rng.gen::<[u8; 32]>())))
        .collect();
    group.bench_function("big_int", |b| {
        b.iter(|| {
            for value in &balances {
                black_box(value.encode().unwrap());
            }
        })
    });

    for leading_zeros in [0, 12, 18] {
        let addresses: Vec<_> = (0..BATCH_SIZE)
            .map(|_| AddressValue(generate_address(&mut rng, leading_zeros)))
            .collect();
        group.bench_with_input(
            BenchmarkId::new("address", leading_zeros),
            &addresses,
            |b, addresses| {
                b.iter(|| {
                    for value in addresses {
                        black_box(value.encode().unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let mut rng = StdRng::seed_from_u64(43);

    let records: Vec<_> = (0..BATCH_SIZE)
        .map(|_| ProposerRecord::new(generate_address(&mut rng, 0), rng.gen_range(0..4)))
        .map(|record| record.encode().unwrap())
        .collect();
    group.bench_function("proposer", |b| {
        b.iter(|| {
            for data in &records {
                black_box(ProposerRecord::decode(data).unwrap());
            }
        })
    });

    let addresses: Vec<_> = (0..BATCH_SIZE)
        .map(|_| AddressValue(generate_address(&mut rng, 12)).encode().unwrap())
        .collect();
    group.bench_function("address", |b| {
        b.iter(|| {
            for data in &addresses {
                black_box(AddressValue::decode(data).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_structured_storage(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(44);
    let contract = generate_address(&mut rng, 0);
    let keys: Vec<_> = (0..BATCH_SIZE).map(|_| B256::from(rng.gen::<[u8; 32]>())).collect();

    c.bench_function("structured_storage_set_get", |b| {
        b.iter(|| {
            let mut storage = StructuredStorage::new(MemorySlots::new());
            for (i, key) in keys.iter().enumerate() {
                storage.set(contract, *key, &UInt64Value(i as u64)).unwrap();
            }
            for key in &keys {
                black_box(storage.get::<UInt64Value>(&contract, key).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_structured_storage);
criterion_main!(benches);
