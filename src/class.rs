use std::fmt;
use std::ops::RangeInclusive;

macro_rules! status_classes {
    ($($class:ident $digit:literal $label:literal),* $(,)?) => {
        /// The class of a status code, implied by its leading digit
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StatusClass {
            $(
                #[doc = concat!("`", $digit, "xx` ", $label)]
                $class,
            )*
            /// Anything outside of `100..=599`
            Unknown,
        }

        impl StatusClass {
            fn from_leading_digit(digit: i64) -> Self {
                match digit {
                    $($digit => Self::$class,)*
                    _ => Self::Unknown,
                }
            }

            /// Returns the inclusive band of codes belonging to this class.
            ///
            /// `Unknown` has no band.
            pub fn range(&self) -> Option<RangeInclusive<u16>> {
                match self {
                    $(Self::$class => Some($digit * 100..=$digit * 100 + 99),)*
                    Self::Unknown => None,
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$class => concat!($digit, "xx ", $label),)*
                    Self::Unknown => "Unknown",
                }
            }

            paste::paste! {
                $(
                    #[doc = "Returns `true` for the " $label " class"]
                    pub fn [<is_ $class:snake>](&self) -> bool {
                        *self == Self::$class
                    }
                )*
            }
        }
    };
}

status_classes! {
    Informational 1 "Informational",
    Success       2 "Success",
    Redirection   3 "Redirection",
    ClientError   4 "Client Error",
    ServerError   5 "Server Error",
}

impl StatusClass {
    /// Returns `true` for client and server errors
    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl From<u16> for StatusClass {
    fn from(code: u16) -> Self {
        classify(code)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Integer types that can be classified as a status code
///
/// Implemented for every primitive integer type. Values that do not fit in an `i64` saturate, which
/// keeps them outside of `100..=599`.
pub trait StatusInteger: Copy {
    fn to_status_integer(self) -> i64;
}

macro_rules! impl_status_integer {
    ($($t:ty),*) => {
        $(
            impl StatusInteger for $t {
                #[allow(unused_comparisons)]
                fn to_status_integer(self) -> i64 {
                    i64::try_from(self).unwrap_or(if self < 0 { i64::MIN } else { i64::MAX })
                }
            }
        )*
    };
}

impl_status_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Returns the class of any integer interpreted as a status code.
///
/// The class is decided by the hundreds digit alone, so codes that are not registered in this
/// crate (e.g. `299`) still land in their band. Values outside of `100..=599` are
/// [`StatusClass::Unknown`].
///
/// ```
/// use http_status::{classify, StatusClass};
///
/// assert_eq!(classify(404), StatusClass::ClientError);
/// assert_eq!(classify(600), StatusClass::Unknown);
/// assert_eq!(classify(-1), StatusClass::Unknown);
/// ```
pub fn classify<C: StatusInteger>(code: C) -> StatusClass {
    let code = code.to_status_integer();

    if !(100..=599).contains(&code) {
        log::trace!(code = code; "Status code is outside of the 100-599 range");
        return StatusClass::Unknown;
    }

    StatusClass::from_leading_digit(code / 100)
}
