//! Primitive adapters. Every primitive encodes as a single value.

use crate::codable::{
    Decode, Decoder, DecoderExt, DecodingError, Encode, Encoder, EncoderExt, EncodingError,
};

macro_rules! impl_codable_copy_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
                    encoder.single_value_container().encode_primitive(*self)
                }
            }

            impl Decode for $ty {
                fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
                    decoder.single_value_container()?.decode_primitive()
                }
            }
        )*
    };
}

impl_codable_copy_primitive!(bool, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Encode for str {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encoder
            .single_value_container()
            .encode_primitive(self.to_string())
    }
}

impl Encode for String {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        self.as_str().encode(encoder)
    }
}

impl Decode for String {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        decoder.single_value_container()?.decode_primitive()
    }
}

/// `char` travels as a one-character string.
impl Encode for char {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encoder
            .single_value_container()
            .encode_primitive(self.to_string())
    }
}

impl Decode for char {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.single_value_container()?;
        let text: String = container.decode_primitive()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DecodingError::data_corrupted_for_single_value(
                container.coding_path(),
                format!("Expected a single character but found {text:?}."),
            )),
        }
    }
}

/// The unit type is stored as null.
impl Encode for () {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        encoder.single_value_container().encode_nil()
    }
}

impl Decode for () {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.single_value_container()?;
        if container.decode_nil() {
            Ok(())
        } else {
            Err(DecodingError::type_mismatch(
                "()",
                container.coding_path().clone(),
                "Expected null for unit value.",
            ))
        }
    }
}
