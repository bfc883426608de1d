//! Range adapters.
//!
//! Bounded ranges encode as a two-element unkeyed container `[lower, upper]`.
//! Decoding rejects bounds unless `lower <= upper` holds. One-sided ranges
//! encode their single bound as a one-element unkeyed container.

use std::{
    cmp::Ordering,
    ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive},
};

use crate::codable::{
    Decode, Decoder, DecoderExt, DecodingError, Encode, Encoder, EncoderExt, EncodingError,
};

fn encode_bounds<T: Encode>(
    encoder: &mut dyn Encoder,
    lower: &T,
    upper: &T,
) -> Result<(), EncodingError> {
    let mut container = encoder.unkeyed_container();
    container.encode(lower)?;
    container.encode(upper)
}

fn decode_bounds<T: Decode + PartialOrd>(
    decoder: &mut dyn Decoder,
    range_name: &str,
) -> Result<(T, T), DecodingError> {
    let mut container = decoder.unkeyed_container()?;
    let lower = container.decode::<T>()?;
    let upper = container.decode::<T>()?;
    // Unordered bounds (a NaN) are rejected along with inverted ones
    if !matches!(lower.partial_cmp(&upper), Some(Ordering::Less | Ordering::Equal)) {
        return Err(DecodingError::data_corrupted(
            container.coding_path().clone(),
            format!("Cannot initialize {range_name} with a lowerBound that is greater than upperBound"),
        ));
    }
    Ok((lower, upper))
}

fn encode_bound<T: Encode>(encoder: &mut dyn Encoder, bound: &T) -> Result<(), EncodingError> {
    let mut container = encoder.unkeyed_container();
    container.encode(bound)
}

fn decode_bound<T: Decode>(decoder: &mut dyn Decoder) -> Result<T, DecodingError> {
    let mut container = decoder.unkeyed_container()?;
    container.decode::<T>()
}

impl<T: Encode> Encode for Range<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_bounds(encoder, &self.start, &self.end)
    }
}

impl<T: Decode + PartialOrd> Decode for Range<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let (lower, upper) = decode_bounds(decoder, "Range")?;
        Ok(lower..upper)
    }
}

impl<T: Encode> Encode for RangeInclusive<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_bounds(encoder, self.start(), self.end())
    }
}

impl<T: Decode + PartialOrd> Decode for RangeInclusive<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let (lower, upper) = decode_bounds(decoder, "ClosedRange")?;
        Ok(lower..=upper)
    }
}

impl<T: Encode> Encode for RangeFrom<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_bound(encoder, &self.start)
    }
}

impl<T: Decode> Decode for RangeFrom<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        decode_bound(decoder).map(|start| start..)
    }
}

impl<T: Encode> Encode for RangeTo<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_bound(encoder, &self.end)
    }
}

impl<T: Decode> Decode for RangeTo<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        decode_bound(decoder).map(|end| ..end)
    }
}

impl<T: Encode> Encode for RangeToInclusive<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encode_bound(encoder, &self.end)
    }
}

impl<T: Decode> Decode for RangeToInclusive<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        decode_bound(decoder).map(|end| ..=end)
    }
}
