//! cursor-collections: generic sequences, hashed containers, and a
//! cursor-based algorithm suite.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: decouple algorithms from storage so one algorithm body serves
//!   contiguous, ring, and linked containers alike, in safe, verifiable
//!   layers that can be reasoned about independently.
//! - Layers:
//!   - cursor: the traversal contract. `Sequence` (read-only walk),
//!     `SequenceMut` (write/swap through cursors), `RandomAccess`
//!     (O(1) offset arithmetic). Cursors are small `Copy` values that
//!     carry the id of the container that minted them.
//!   - storage: `VecSeq` (contiguous), `DequeSeq` (ring buffer), and
//!     `NodeList` (slotmap-backed doubly-linked list) each implement the
//!     cursor traits over their natural layout.
//!   - hashing: `HashCore<K, V, S>` pairs a `NodeList` of entries with a
//!     separate `BucketArray` index; `UniqueMap`/`MultiMap` and
//!     `UniqueSet`/`MultiSet` are thin policy wrappers over it.
//!   - algo: free functions over `[first, last)` cursor ranges, from
//!     `find` through `sort` to `next_permutation`.
//!
//! Constraints
//! - Single-threaded containers; no atomics beyond the owner-id mint.
//! - Cursors are owner-checked: handing a cursor to a container that did
//!   not mint it is a caller bug and panics.
//! - `next(end) == end`; `prev(begin) == end`; a single end sentinel per
//!   container serves both directions.
//! - Hashed containers iterate in insertion order and keep that order
//!   across rehashes.
//!
//! Reentrancy policy
//! - `HashCore` methods hold a debug-only reentry guard while internal
//!   state can be transiently inconsistent. The only user code those
//!   methods run is `K: Hash/Eq` during probing, so reentering from
//!   either is refused in debug builds.
//!
//! Hasher and rehashing invariants
//! - Each entry stores its `u64` hash at insertion and the bucket index
//!   always uses the stored hash; `K: Hash` is never invoked again after
//!   insert, so rehashing never calls into user code.
//! - Rehash grows only, and placement is reproducible: an entry with
//!   stored hash `h` lives in bucket `h % bucket_count`.
//!
//! Notes and non-goals
//! - Algorithms never allocate scratch space; copying variants write into
//!   caller-provided destination ranges and panic on exhaustion.
//! - `stable_partition` currently shares `partition`'s unstable pass.
//! - No thread-safe variants (could be added later).

pub mod algo;
mod bucket;
pub mod cursor;
pub mod deque_seq;
mod hash_core;
pub mod hash_map;
mod hash_proptest;
pub mod hash_set;
pub mod node_list;
mod reentry;
pub mod vec_seq;

// Public surface
pub use cursor::{AccessError, OwnerId, RandomAccess, Sequence, SequenceMut};
pub use deque_seq::{DequeCursor, DequeSeq};
pub use hash_map::{MultiMap, UniqueMap};
pub use hash_set::{MultiSet, UniqueSet};
pub use node_list::{ListCursor, NodeList};
pub use vec_seq::{VecCursor, VecSeq};
