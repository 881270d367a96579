//! Schema composition
//!
//! Merging is a shallow union over output keys. When several schemas describe
//! the same key, the rightmost descriptor replaces the earlier one wholesale;
//! attributes of the earlier descriptor (such as its default) are not kept.
//!
//! Copyright (c) 2025 Shiftify Team
//! Licensed under the Apache-2.0 license

use super::Schema;

impl Schema {
    /// Merge `others` over this schema, later keys overriding earlier ones
    pub fn merge<'a, I>(&self, others: I) -> Schema
    where
        I: IntoIterator<Item = &'a Schema>,
    {
        let mut merged = self.clone();
        for other in others {
            for (key, descriptor) in other.iter() {
                merged.insert(key, descriptor.clone());
            }
        }
        merged
    }
}
