//! Stable per-value hashing and the declaration-set checksum
//!
//! The checksum must survive persistence across process runs, so it is
//! built on SHA-256 rather than `std`'s per-process-randomized hasher.
//! Each value hashes its type tag plus its canonical string form; the
//! set checksum is the wrapping sum over all declared values in order.
//! Only ever compared against itself, never across implementations.

use sha2::{Digest, Sha256};

use crate::descriptor::PropDescriptor;
use crate::value::{PropType, PropValue};

fn type_tag(ty: PropType) -> u8 {
    match ty {
        PropType::Str => 0,
        PropType::Int => 1,
        PropType::Short => 2,
        PropType::Byte => 3,
        PropType::Bool => 4,
        PropType::Float => 5,
        PropType::Double => 6,
    }
}

/// Stable, type-aware hash of a single value.
pub fn value_hash(value: &PropValue) -> i32 {
    let mut hasher = Sha256::new();
    hasher.update([type_tag(value.prop_type())]);
    hasher.update(value.to_string().as_bytes());
    let digest = hasher.finalize();
    i32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Checksum over a descriptor set's current values, in declaration order.
pub fn fields_checksum(descriptors: &[PropDescriptor]) -> i32 {
    descriptors
        .iter()
        .fold(0i32, |sum, d| sum.wrapping_add(value_hash(&d.value())))
}
