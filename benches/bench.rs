use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rayon::prelude::*;
use scenepool::*;

const PARTICLE_BYTES: usize = 4 * 1024;

struct Allocator;

impl Factory<Vec<u8>> for Allocator {
    #[inline(always)]
    fn create(&mut self) -> Result<Vec<u8>, FactoryError> {
        Ok(Vec::with_capacity(PARTICLE_BYTES))
    }
}

fn spawn_despawn(c: &mut Criterion) {
    c.bench_function("scenepool", |b| {
        let mut pool = ObjectPool::new(Allocator, (), 1024).unwrap();
        b.iter(|| {
            let handle = black_box(pool.spawn().unwrap());
            pool.despawn(handle).unwrap();
        })
    });
    c.bench_function("scenepool_burst", |b| {
        let mut pool = ObjectPool::new(Allocator, (), 1024).unwrap();
        b.iter(|| {
            for _ in 0..1024 {
                black_box(pool.try_spawn());
            }
            black_box(pool.reset_all())
        })
    });
    c.bench_function("system", |b| {
        let mut alloc = Allocator;
        b.iter(|| {
            let obj = black_box(alloc.create().unwrap());
            black_box(obj.capacity())
        })
    });
}

fn deferred_despawn(c: &mut Criterion) {
    c.bench_function("scenepool_deferred_multi", |b| {
        let mut pool = ObjectPool::new(Allocator, (), 8192).unwrap();
        b.iter(|| {
            let handles: Vec<_> = (0..8192).map(|_| pool.spawn().unwrap()).collect();
            let despawner = pool.despawner();
            handles.par_iter().for_each(|&handle| despawner.request(handle));
            black_box(pool.flush_despawns())
        })
    });
}

criterion_group!(benches, spawn_despawn, deferred_despawn);
criterion_main!(benches);
