//! Certificate serial number.

/// A certificate's serial number, preserved exactly as it appeared on the
/// wire — including any leading 0x00 sign byte DER's minimal two's-complement
/// INTEGER encoding adds when the high bit of the first significant byte
/// would otherwise read as negative. Serial numbers routinely exceed machine
/// integer width, so no integer coercion is offered here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialNumber<'a>(&'a [u8]);

impl<'a> SerialNumber<'a> {
    /// Wrap the raw INTEGER content octets.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// The raw two's-complement bytes, sign byte included.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Render as a bignum, for display or for a collaborator that wants an
    /// owned numeric form.
    pub fn to_bignum(self) -> num_bigint::BigInt {
        let sign = if self.0.first().is_some_and(|b| b & 0x80 != 0) {
            num_bigint::Sign::Minus
        } else {
            num_bigint::Sign::Plus
        };
        num_bigint::BigInt::from_bytes_be(sign, self.0)
    }
}
