//! Embedded word list
//!
//! Compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));
