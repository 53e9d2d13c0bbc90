// This file is part of ring-deque.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Deque`](crate::Deque).
//!
//! - **Serialize**: as a sequence of the live elements, front to back. The
//!   physical layout of the ring is not part of the format.
//! - **Deserialize**: from any sequence of at most `N` elements, pushed at the
//!   back in order.
//!
//! Deserializing an over-long sequence is a deserializer error; it never
//! reaches the deque's error policy.

// Crate imports
use crate::deque::Deque;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize, P> Serialize for Deque<T, N, P> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct DequeVisitor<T, const N: usize, P>(PhantomData<fn() -> (T, P)>);

impl<'de, T, const N: usize, P> de::Visitor<'de> for DequeVisitor<T, N, P>
where
    T: Deserialize<'de>,
{
    type Value = Deque<T, N, P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Deque::<T, N, P>::new();
        while let Some(elem) = a.next_element::<T>()? {
            if out.is_full() {
                return Err(de::Error::custom(format_args!(
                    "too many elements (capacity {N})"
                )));
            }
            // SAFETY: not full, checked above.
            unsafe { out.push_back_unchecked(elem) };
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize, P> Deserialize<'de> for Deque<T, N, P>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(DequeVisitor::<T, N, P>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Deque, policy::Panic};
    use alloc::string::ToString;

    #[test]
    fn test_serde_roundtrip_json_wrapped() {
        let mut d: Deque<i32, 4> = Deque::new();
        for v in [0, 1, 2, 3] {
            d.push_back(v).unwrap();
        }
        d.pop_front();
        d.push_back(4).unwrap();
        let s = serde_json::to_string(&d).unwrap();
        assert_eq!(s, "[1,2,3,4]");
        let back: Deque<i32, 4> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, d);
        assert_eq!(back.ring.start, 0);
    }

    #[test]
    fn test_deserialize_over_capacity_errors() {
        let err = serde_json::from_str::<Deque<i32, 3>>("[1,2,3,4]").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("too many elements (capacity 3)"), "msg: {msg}");
    }

    #[test]
    fn test_deserialize_over_capacity_does_not_trigger_policy() {
        let res = serde_json::from_str::<Deque<i32, 1, Panic>>("[1,2]");
        assert!(res.is_err());
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let d: Deque<i32, 4> = Deque::default();
        let s = serde_json::to_string(&d).unwrap();
        assert_eq!(s, "[]");
        let back: Deque<i32, 4> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Deque<i32, 4>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("array or sequence with at most 4 elements"),
            "unexpected error message: {msg}"
        );
    }
}
