//! Adapters for optional and boxed values.

use std::{rc::Rc, sync::Arc};

use crate::codable::{
    Decode, Decoder, DecoderExt, DecodingError, Encode, Encoder, EncoderExt, EncodingError,
};

/// `None` encodes as an explicit null; `Some(v)` encodes `v` in the same slot.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        let mut container = encoder.single_value_container();
        match self {
            Some(value) => container.encode(value),
            None => container.encode_nil(),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        let mut container = decoder.single_value_container()?;
        if container.decode_nil() {
            Ok(None)
        } else {
            container.decode::<T>().map(Some)
        }
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        T::decode(decoder).map(Box::new)
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Rc<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        T::decode(decoder).map(Rc::new)
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    fn encode(&self, encoder: &mut dyn Encoder) -> Result<(), EncodingError> {
        (**self).encode(encoder)
    }
}

impl<T: Decode> Decode for Arc<T> {
    fn decode(decoder: &mut dyn Decoder) -> Result<Self, DecodingError> {
        T::decode(decoder).map(Arc::new)
    }
}
