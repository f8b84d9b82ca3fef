use rayon::prelude::*;
use scenepool::*;

#[derive(Default)]
struct VisibilitySink {
    visible: usize,
}

impl SceneSink<u64> for VisibilitySink {
    fn attach(&mut self, _obj: &mut u64) {}

    fn set_active(&mut self, _obj: &mut u64, active: bool) {
        if active {
            self.visible += 1;
        } else {
            self.visible -= 1;
        }
    }
}

fn pool(capacity_hint: usize) -> ObjectPool<u64, CloneFactory<u64>, VisibilitySink> {
    // warm-up deactivations are counted against a sink that starts "visible"
    let sink = VisibilitySink {
        visible: capacity_hint,
    };
    ObjectPool::new(CloneFactory::new(0), sink, capacity_hint).unwrap()
}

#[test]
fn test_request_and_flush() {
    let mut pool = pool(4);
    let despawner = pool.despawner();
    let a = pool.spawn().unwrap();
    let b = pool.spawn().unwrap();

    despawner.request(a);
    assert_eq!(despawner.pending(), 1);
    assert!(pool.is_active(a));

    let stats = pool.flush_despawns();
    assert_eq!(
        stats,
        FlushStats {
            despawned: 1,
            rejected: 0
        }
    );
    assert_eq!(despawner.pending(), 0);
    assert!(!pool.is_active(a));
    assert!(pool.is_active(b));
    assert_eq!(pool.sink().visible, 1);
}

#[test]
fn test_duplicate_requests_are_rejected() {
    let mut pool = pool(2);
    let despawner = pool.despawner();
    let a = pool.spawn().unwrap();

    despawner.request(a);
    despawner.clone().request(a);
    let stats = pool.flush_despawns();
    assert_eq!(stats.despawned, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(pool.available_len(), 2);
    assert_eq!(pool.sink().visible, 0);
}

#[test]
fn test_foreign_requests_are_rejected() {
    let mut mine = pool(1);
    let mut theirs = pool(1);
    let foreign = theirs.spawn().unwrap();

    mine.despawner().request(foreign);
    assert_eq!(mine.flush_despawns().rejected, 1);
    assert!(theirs.is_active(foreign));
}

#[test]
fn test_empty_flush() {
    let mut pool = pool(1);
    assert_eq!(pool.flush_despawns(), FlushStats::default());
}

#[test]
fn test_requests_from_many_threads() {
    let mut pool = pool(256);
    let handles: Vec<_> = (0..256).map(|_| pool.spawn().unwrap()).collect();
    let despawner = pool.despawner();

    handles.par_iter().for_each(|&handle| despawner.request(handle));
    // every other object is hit twice
    handles
        .par_iter()
        .step_by(2)
        .for_each(|&handle| despawner.request(handle));

    let stats = pool.flush_despawns();
    assert_eq!(stats.despawned, 256);
    assert_eq!(stats.rejected, 128);
    assert_eq!(pool.active_len(), 0);
    assert_eq!(pool.available_len(), 256);
    assert_eq!(pool.sink().visible, 0);
}
