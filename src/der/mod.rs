//! Hand-rolled, zero-copy DER reader.
//!
//! Everything here operates on borrowed byte slices and never allocates on
//! the decode path. [reader] splits a buffer into TLV headers; [primitives]
//! interprets the content octets of a TLV once its universal tag is known.
//! Nothing above this module is allowed to re-serialize bytes it already
//! holds a slice of — certificate signature verification depends on that.

pub mod error;
pub mod primitives;
pub mod reader;

pub use error::{DerError, DerErrorKind};
pub use primitives::{decode_bit_string, decode_boolean, decode_integer, decode_object_identifier, decode_string, decode_time, BitStringValue, Integer, StringEncoding, StringValue, Time};
pub use reader::{peek_tag, read_tlv, read_tlv_expect, tag, Class, Tlv};
