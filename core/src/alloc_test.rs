#[cfg(test)]
mod tests {
    use crate::alloc::{AllocSnapshot, TrackingAllocator};
    use std::alloc::{GlobalAlloc, Layout};

    #[test]
    fn test_delta_subtracts_counters() {
        let before = AllocSnapshot {
            allocations: 3,
            bytes: 96,
        };
        let after = AllocSnapshot {
            allocations: 10,
            bytes: 1120,
        };
        assert_eq!(
            before.delta(&after),
            AllocSnapshot {
                allocations: 7,
                bytes: 1024,
            }
        );
    }

    #[test]
    fn test_delta_saturates_when_counters_go_backwards() {
        let before = AllocSnapshot {
            allocations: 5,
            bytes: 50,
        };
        assert_eq!(before.delta(&AllocSnapshot::default()), AllocSnapshot::default());
    }

    #[test]
    fn test_plus_accumulates() {
        let a = AllocSnapshot {
            allocations: 1,
            bytes: 8,
        };
        let b = AllocSnapshot {
            allocations: 2,
            bytes: 16,
        };
        assert_eq!(
            a.plus(&b),
            AllocSnapshot {
                allocations: 3,
                bytes: 24,
            }
        );
    }

    #[test]
    fn test_tracking_allocator_records_direct_calls() {
        let layout = Layout::from_size_align(256, 8).unwrap();
        let before = AllocSnapshot::take();
        unsafe {
            let ptr = TrackingAllocator.alloc(layout);
            assert!(!ptr.is_null());
            let grown = TrackingAllocator.realloc(ptr, layout, 512);
            assert!(!grown.is_null());
            TrackingAllocator.dealloc(grown, Layout::from_size_align(512, 8).unwrap());
        }
        let delta = before.delta(&AllocSnapshot::take());
        // Other tests may allocate through the tracker concurrently.
        assert!(delta.allocations >= 2, "delta = {:?}", delta);
        assert!(delta.bytes >= 768, "delta = {:?}", delta);
    }
}
