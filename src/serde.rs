//! `serde` support for [`QuadVec`](crate::QuadVec) (feature = `"serde"`).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence; storage is pre-sized from the
//!   deserializer's length hint with the usual bulk sizing.

use core::fmt;
use core::marker::PhantomData;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::vec::QuadVec;

impl<T: Serialize> Serialize for QuadVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = QuadVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = QuadVec::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for QuadVec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::QuadVec;

    #[test]
    fn test_serde_roundtrip_json() {
        let v = QuadVec::from_slice(&[1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: QuadVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: QuadVec<i32> = QuadVec::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: QuadVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_rejects_non_sequence() {
        let err = serde_json::from_str::<QuadVec<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        assert!(err.to_string().contains("a sequence"), "{err}");
    }
}
