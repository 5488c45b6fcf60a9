//! X.509 Certificate utilities.

pub mod extensions;
pub mod parse;
pub mod validate;
pub mod types {
    //! X.509 Certificate types.

    pub mod distinguished_name;
    pub mod general_name;
    pub mod serial_number;
    pub mod spki;
    pub mod validity;

    pub use self::distinguished_name::Name;
    pub use self::general_name::{GeneralName, GeneralNameList, GeneralNameTag};
    pub use self::serial_number::SerialNumber;
    pub use self::spki::{Spki, SpkiKey};
    pub use self::validity::Validity;
}

pub use self::parse::parse;
pub use self::parse::CertificateView;

