//! Embedded word pool
//!
//! Compiled into the binary at build time from `data/vocabulary.txt`.

include!(concat!(env!("OUT_DIR"), "/vocabulary.rs"));
