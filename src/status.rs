//! HTTP status code constants
//!
//! Every registered code is available in two forms:
//! - a plain `u16` constant in this module (e.g. [`NOT_FOUND`]), for places that just want the
//!   number.
//! - an associated constant on [`StatusCode`] (e.g. [`StatusCode::NOT_FOUND`]), which also knows
//!   its name, title, class and defining RFC section.
//!
//! Both forms are generated from the same table below.
use crate::class::{classify, StatusClass};
use crate::reference::Reference;
use std::fmt;

macro_rules! status_codes {
    ($($name:ident $value:literal $title:literal ($rfc:literal, $section:literal)),* $(,)?) => {
        $(
            #[doc = concat!(
                "`", $value, "` [", $title, "](https://tools.ietf.org/html/rfc",
                $rfc, "#section-", $section, ")"
            )]
            pub const $name: u16 = $value;
        )*

        impl StatusCode {
            $(
                #[doc = concat!("`", $value, " ", $title, "`, defined in RFC ", $rfc, ", Section ", $section)]
                pub const $name: StatusCode = StatusCode::new(
                    stringify!($name),
                    $value,
                    $title,
                    Reference::new($rfc, $section),
                );
            )*
        }

        pub(crate) static ALL: &[StatusCode] = &[$(StatusCode::$name,)*];
    }
}

macro_rules! class_predicates {
    ($($class:ident),*) => {
        paste::paste! {
            $(
                #[doc = "Returns `true` if the code belongs to the [`StatusClass::" $class "`] class"]
                pub fn [<is_ $class:snake>](&self) -> bool {
                    self.class().[<is_ $class:snake>]()
                }
            )*
        }
    };
}

/// A registered HTTP status code
///
/// Values of this type cannot be built outside of this crate. Use the associated constants, or
/// look one up with the functions in the [`registry`](crate::registry) module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    name: &'static str,
    value: u16,
    title: &'static str,
    reference: Reference,
}

impl StatusCode {
    const fn new(
        name: &'static str,
        value: u16,
        title: &'static str,
        reference: Reference,
    ) -> Self {
        Self {
            name,
            value,
            title,
            reference,
        }
    }

    /// Returns the symbolic name, e.g. `NOT_FOUND`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the numeric value, e.g. `404`
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Returns the class implied by the leading digit of the value
    pub fn class(&self) -> StatusClass {
        classify(self.value)
    }

    /// Returns the RFC section that defines this code
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// Returns the name the defining RFC uses for this code, e.g. `Not Found` or `IM Used`
    pub fn title(&self) -> &'static str {
        self.title
    }

    class_predicates!(Informational, Success, Redirection, ClientError, ServerError);
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.title())
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> Self {
        code.value
    }
}

impl PartialEq<u16> for StatusCode {
    fn eq(&self, other: &u16) -> bool {
        self.value == *other
    }
}

impl PartialEq<StatusCode> for u16 {
    fn eq(&self, other: &StatusCode) -> bool {
        *self == other.value
    }
}

status_codes! {
    // 1xx Informational
    CONTINUE                        100 "Continue"                        (2616, "10.1.1"),
    SWITCHING_PROTOCOLS             101 "Switching Protocols"             (2616, "10.1.2"),
    PROCESSING                      102 "Processing"                      (2518, "10.1"),
    EARLY_HINTS                     103 "Early Hints"                     (8297, "2"),

    // 2xx Success
    OK                              200 "OK"                              (2616, "10.2.1"),
    CREATED                         201 "Created"                         (2616, "10.2.2"),
    ACCEPTED                        202 "Accepted"                        (2616, "10.2.3"),
    NON_AUTHORITATIVE_INFORMATION   203 "Non-Authoritative Information"   (2616, "10.2.4"),
    NO_CONTENT                      204 "No Content"                      (2616, "10.2.5"),
    RESET_CONTENT                   205 "Reset Content"                   (2616, "10.2.6"),
    PARTIAL_CONTENT                 206 "Partial Content"                 (2616, "10.2.7"),
    MULTI_STATUS                    207 "Multi-Status"                    (4918, "11.1"),
    ALREADY_REPORTED                208 "Already Reported"                (5842, "7.1"),
    IM_USED                         226 "IM Used"                         (3229, "10.4.1"),

    // 3xx Redirection
    MULTIPLE_CHOICES                300 "Multiple Choices"                (2616, "10.3.1"),
    MOVED_PERMANENTLY               301 "Moved Permanently"               (2616, "10.3.2"),
    FOUND                           302 "Found"                           (2616, "10.3.3"),
    SEE_OTHER                       303 "See Other"                       (2616, "10.3.4"),
    NOT_MODIFIED                    304 "Not Modified"                    (2616, "10.3.5"),
    USE_PROXY                       305 "Use Proxy"                       (2616, "10.3.6"),
    TEMPORARY_REDIRECT              307 "Temporary Redirect"              (2616, "10.3.8"),

    // 4xx Client Error
    BAD_REQUEST                     400 "Bad Request"                     (2616, "10.4.1"),
    UNAUTHORIZED                    401 "Unauthorized"                    (2616, "10.4.2"),
    PAYMENT_REQUIRED                402 "Payment Required"                (2616, "10.4.3"),
    FORBIDDEN                       403 "Forbidden"                       (2616, "10.4.4"),
    NOT_FOUND                       404 "Not Found"                       (2616, "10.4.5"),
    METHOD_NOT_ALLOWED              405 "Method Not Allowed"              (2616, "10.4.6"),
    NOT_ACCEPTABLE                  406 "Not Acceptable"                  (2616, "10.4.7"),
    PROXY_AUTHENTICATION_REQUIRED   407 "Proxy Authentication Required"   (2616, "10.4.8"),
    REQUEST_TIMEOUT                 408 "Request Timeout"                 (2616, "10.4.9"),
    CONFLICT                        409 "Conflict"                        (2616, "10.4.10"),
    GONE                            410 "Gone"                            (2616, "10.4.11"),
    LENGTH_REQUIRED                 411 "Length Required"                 (2616, "10.4.12"),
    PRECONDITION_FAILED             412 "Precondition Failed"             (2616, "10.4.13"),
    REQUEST_ENTITY_TOO_LARGE        413 "Request Entity Too Large"        (2616, "10.4.14"),
    REQUEST_URI_TOO_LONG            414 "Request-URI Too Long"            (2616, "10.4.15"),
    UNSUPPORTED_MEDIA_TYPE          415 "Unsupported Media Type"          (2616, "10.4.16"),
    REQUESTED_RANGE_NOT_SATISFIABLE 416 "Requested Range Not Satisfiable" (2616, "10.4.17"),
    EXPECTATION_FAILED              417 "Expectation Failed"              (2616, "10.4.18"),

    // 5xx Server Error
    INTERNAL_SERVER_ERROR           500 "Internal Server Error"           (2616, "10.5.1"),
    NOT_IMPLEMENTED                 501 "Not Implemented"                 (2616, "10.5.2"),
    BAD_GATEWAY                     502 "Bad Gateway"                     (2616, "10.5.3"),
    SERVICE_UNAVAILABLE             503 "Service Unavailable"             (2616, "10.5.4"),
    GATEWAY_TIMEOUT                 504 "Gateway Timeout"                 (2616, "10.5.5"),
    HTTP_VERSION_NOT_SUPPORTED      505 "HTTP Version Not Supported"      (2616, "10.5.6"),
    VARIANT_ALSO_NEGOTIATES         506 "Variant Also Negotiates"         (2295, "8.1"),
    INSUFFICIENT_STORAGE            507 "Insufficient Storage"            (4918, "11.5"),
    LOOP_DETECTED                   508 "Loop Detected"                   (5842, "7.2"),
    NOT_EXTENDED                    510 "Not Extended"                    (2774, "7"),
    NETWORK_AUTHENTICATION_REQUIRED 511 "Network Authentication Required" (6585, "6"),
}
