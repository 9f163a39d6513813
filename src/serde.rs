use crate::DynamicArray;
use serde::{
    de::{Deserialize, Deserializer, SeqAccess, Visitor},
    ser::{Serialize, SerializeSeq, Serializer},
};
use std::{
    fmt::{self, Formatter},
    marker::PhantomData,
};

impl<T> Serialize for DynamicArray<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in self {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for DynamicArray<T>
where
    T: Default + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(DynamicArrayVisitor(PhantomData))
    }
}

// Upper bound on slots reserved from an untrusted length hint.
const MAX_PREALLOC: usize = 1 << 12;

struct DynamicArrayVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for DynamicArrayVisitor<T>
where
    T: Default + Deserialize<'de>,
{
    type Value = DynamicArray<T>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = DynamicArray::<T>::with_capacity(hint);
        while let Some(next) = seq.next_element()? {
            out.push(next);
        }
        Ok(out)
    }
}
