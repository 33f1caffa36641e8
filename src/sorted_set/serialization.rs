//! Serde support for [`SortedSet`].
//!
//! A set serializes as a sequence in ascending order. Deserialization
//! accepts any sequence: elements are sorted and deduplicated exactly as
//! ordinary construction does.

use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::SortedSet;

impl<T: Serialize> Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

struct SortedSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SortedSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(sequence.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = sequence.next_element()? {
            elements.push(element);
        }
        Ok(SortedSet::from(elements))
    }
}

impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn serialize_writes_ascending_sequence() {
        let set = SortedSet::from([9, 4, 6]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[4,6,9]");
    }

    #[rstest]
    fn serialize_empty() {
        let set: SortedSet<i32> = SortedSet::new();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }

    #[rstest]
    fn deserialize_sorts_and_deduplicates() {
        let set: SortedSet<i32> = serde_json::from_str("[7, 7, 3, 1, 8]").unwrap();
        assert_eq!(set.as_slice(), &[1, 3, 7, 8]);
    }

    #[rstest]
    fn deserialize_rejects_non_sequence() {
        let result: Result<SortedSet<i32>, _> = serde_json::from_str("{\"a\": 1}");
        assert!(result.is_err());
    }
}
