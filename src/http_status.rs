use crate::error::ParseStatusError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// An HTTP status code together with its reason phrase and an optional message.
///
/// Canonical values are the associated constants; use [`lookup`] to go from a
/// number to one of them and [`HttpStatus::with_message`] to attach details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HttpStatus {
    code: u16,
    #[serde(rename = "reason")]
    text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<&'static str>,
}

/// The range a status code falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusClass::Informational => "Informational",
            StatusClass::Success => "Success",
            StatusClass::Redirection => "Redirection",
            StatusClass::ClientError => "Client Error",
            StatusClass::ServerError => "Server Error",
        };
        f.write_str(name)
    }
}

impl HttpStatus {
    const fn standard(code: u16, text: &'static str) -> HttpStatus {
        HttpStatus {
            code,
            text,
            message: None,
            extension: None,
        }
    }

    const fn vendor(code: u16, text: &'static str, vendor: &'static str) -> HttpStatus {
        HttpStatus {
            code,
            text,
            message: None,
            extension: Some(vendor),
        }
    }

    // 1xx
    /// Interim response: the first part of the request was received and not rejected.
    /// The client should send the rest of the request, or ignore this if it already has.
    /// The server sends a final response once the request completes.
    pub const CONTINUE: HttpStatus = HttpStatus::standard(100, "Continue");
    /// Answer to an `Upgrade` request header, naming the protocol the server switches to.
    pub const SWITCHING_PROTOCOLS: HttpStatus = HttpStatus::standard(101, "Switching Protocols");
    /// WebDAV. The request was received and is being processed, but no response is ready yet.
    pub const PROCESSING: HttpStatus = HttpStatus::standard(102, "Processing");
    /// Used with the `Link` header so the user agent can start preloading resources
    /// while the server prepares the final response.
    pub const EARLY_HINTS: HttpStatus = HttpStatus::standard(103, "Early Hints");

    // 2xx
    /// The request succeeded.
    pub const OK: HttpStatus = HttpStatus::standard(200, "OK");
    /// The request succeeded and a new resource was created.
    pub const CREATED: HttpStatus = HttpStatus::standard(201, "Created");
    /// The request was received but has not completed yet. Typical for long-running
    /// requests and batch processing.
    pub const ACCEPTED: HttpStatus = HttpStatus::standard(202, "Accepted");
    /// The returned metadata comes from a local or third-party copy rather than the
    /// origin server, and may be a subset or superset of the original.
    pub const NON_AUTHORITATIVE_INFORMATION: HttpStatus =
        HttpStatus::standard(203, "Non-Authoritative Information");
    /// The request was fulfilled and there is no body to return. Updated metadata may
    /// still be sent.
    pub const NO_CONTENT: HttpStatus = HttpStatus::standard(204, "No Content");
    /// Tells the client to reset the document that sent the request.
    pub const RESET_CONTENT: HttpStatus = HttpStatus::standard(205, "Reset Content");
    /// Answer to a `Range` request for part of a resource.
    pub const PARTIAL_CONTENT: HttpStatus = HttpStatus::standard(206, "Partial Content");
    /// WebDAV. Several operations happened; the body holds the status of each.
    pub const MULTI_STATUS: HttpStatus = HttpStatus::standard(207, "Multi-Status");
    /// WebDAV. The same binding was already listed earlier in the response. Only appears
    /// in response bodies, never in a status line.
    pub const ALREADY_REPORTED: HttpStatus = HttpStatus::standard(208, "Already Reported");
    /// A GET was fulfilled and the body is the result of instance manipulations applied
    /// to the current instance.
    pub const IM_USED: HttpStatus = HttpStatus::standard(226, "IM Used");

    // 3xx
    /// More than one response is possible and the user agent or user should pick one.
    pub const MULTIPLE_CHOICES: HttpStatus = HttpStatus::standard(300, "Multiple Choices");
    /// The resource moved permanently to the URL in the `Location` header. Cacheable
    /// unless stated otherwise.
    pub const MOVED_PERMANENTLY: HttpStatus = HttpStatus::standard(301, "Moved Permanently");
    /// The resource moved temporarily to the URL in the `Location` header. Only cacheable
    /// when `Cache-Control` or `Expires` says so.
    pub const FOUND: HttpStatus = HttpStatus::standard(302, "Found");
    /// The response lives under another URI and should be fetched there with GET.
    pub const SEE_OTHER: HttpStatus = HttpStatus::standard(303, "See Other");
    /// The resource has not changed, so the client can keep using its cached copy.
    pub const NOT_MODIFIED: HttpStatus = HttpStatus::standard(304, "Not Modified");
    /// Deprecated. The resource must be accessed through a proxy.
    pub const USE_PROXY: HttpStatus = HttpStatus::standard(305, "Use Proxy");
    /// Reserved, no longer used.
    pub const UNUSED: HttpStatus = HttpStatus::standard(306, "Unused");
    /// Like [`HttpStatus::FOUND`], but the client must repeat the request with the same
    /// method at the other URI.
    pub const TEMPORARY_REDIRECT: HttpStatus = HttpStatus::standard(307, "Temporary Redirect");
    /// Like [`HttpStatus::MOVED_PERMANENTLY`], but the client must repeat the request
    /// with the same method at the URI in `Location`.
    pub const PERMANENT_REDIRECT: HttpStatus = HttpStatus::standard(308, "Permanent Redirect");

    // 4xx
    /// The server could not understand the request because of malformed syntax. It
    /// should not be repeated unchanged.
    pub const BAD_REQUEST: HttpStatus = HttpStatus::standard(400, "Bad Request");
    /// The request needs user authentication; the client may retry with an
    /// `Authorization` header.
    pub const UNAUTHORIZED: HttpStatus = HttpStatus::standard(401, "Unauthorized");
    /// Reserved for future use by digital payment systems.
    pub const PAYMENT_REQUIRED: HttpStatus = HttpStatus::standard(402, "Payment Required");
    /// The client has no access rights to the content. Unlike 401, the server knows who
    /// the client is.
    pub const FORBIDDEN: HttpStatus = HttpStatus::standard(403, "Forbidden");
    /// The server cannot find the requested resource.
    pub const NOT_FOUND: HttpStatus = HttpStatus::standard(404, "Not Found");
    /// The method is known to the server but is disabled for this resource.
    pub const METHOD_NOT_ALLOWED: HttpStatus = HttpStatus::standard(405, "Method Not Allowed");
    /// Nothing matches the criteria the user agent gave in its `Accept` header.
    pub const NOT_ACCEPTABLE: HttpStatus = HttpStatus::standard(406, "Not Acceptable");
    /// The client must first authenticate with the proxy.
    pub const PROXY_AUTHENTICATION_REQUIRED: HttpStatus =
        HttpStatus::standard(407, "Proxy Authentication Required");
    /// The server did not receive a complete request within its timeout.
    pub const REQUEST_TIMEOUT: HttpStatus = HttpStatus::standard(408, "Request Timeout");
    /// The request conflicts with the current state of the resource.
    pub const CONFLICT: HttpStatus = HttpStatus::standard(409, "Conflict");
    /// The resource is no longer available on the server.
    pub const GONE: HttpStatus = HttpStatus::standard(410, "Gone");
    /// The server refuses the request without a `Content-Length`. The client may retry
    /// with a valid one.
    pub const LENGTH_REQUIRED: HttpStatus = HttpStatus::standard(411, "Length Required");
    /// The server does not meet the preconditions in the request headers.
    pub const PRECONDITION_FAILED: HttpStatus = HttpStatus::standard(412, "Precondition Failed");
    /// The request body is larger than the server allows.
    pub const REQUEST_ENTITY_TOO_LARGE: HttpStatus =
        HttpStatus::standard(413, "Request Entity Too Large");
    /// The URI is longer than the server is willing to interpret.
    pub const REQUEST_URI_TOO_LONG: HttpStatus = HttpStatus::standard(414, "Request URI Too Long");
    /// The server does not support the media type in `Content-Type`.
    pub const UNSUPPORTED_MEDIA_TYPE: HttpStatus =
        HttpStatus::standard(415, "Unsupported Media Type");
    /// The range in the `Range` header cannot be served.
    pub const REQUESTED_RANGE_NOT_SATISFIABLE: HttpStatus =
        HttpStatus::standard(416, "Requested Range Not Satisfiable");
    /// The server cannot meet the `Expect` request header.
    pub const EXPECTATION_FAILED: HttpStatus = HttpStatus::standard(417, "Expectation Failed");
    /// April Fools' joke from RFC 2324, not expected from real servers.
    pub const IM_A_TEAPOT: HttpStatus = HttpStatus::standard(418, "I'm a Teapot");
    /// Extension (Twitter). Returned by the Search and Trends API when the client is
    /// rate limited.
    pub const ENHANCE_YOUR_CALM: HttpStatus =
        HttpStatus::vendor(420, "Enhance Your Calm", "Twitter");
    /// WebDAV. Content type and syntax are fine, but the server still cannot process
    /// the request.
    pub const UNPROCESSABLE_ENTITY: HttpStatus = HttpStatus::standard(422, "Unprocessable Entity");
    /// WebDAV. The resource is locked.
    pub const LOCKED: HttpStatus = HttpStatus::standard(423, "Locked");
    /// WebDAV. The request failed because an earlier request failed.
    pub const FAILED_DEPENDENCY: HttpStatus = HttpStatus::standard(424, "Failed Dependency");
    /// The server will not risk processing a request that might be replayed.
    pub const TOO_EARLY: HttpStatus = HttpStatus::standard(425, "Too Early");
    /// The server will only process the request after the client upgrades to another
    /// protocol.
    pub const UPGRADE_REQUIRED: HttpStatus = HttpStatus::standard(426, "Upgrade Required");
    /// The origin server requires the request to be conditional.
    pub const PRECONDITION_REQUIRED: HttpStatus =
        HttpStatus::standard(428, "Precondition Required");
    /// Rate limiting: the user sent too many requests in a given time.
    pub const TOO_MANY_REQUESTS: HttpStatus = HttpStatus::standard(429, "Too Many Requests");
    /// The header fields are too large for the server to process.
    pub const REQUEST_HEADER_FIELDS_TOO_LARGE: HttpStatus =
        HttpStatus::standard(431, "Request Header Fields Too Large");
    /// Extension (Nginx). Nothing is returned and the connection is closed.
    pub const NO_RESPONSE: HttpStatus = HttpStatus::vendor(444, "No Response", "Nginx");
    /// Extension (Microsoft). Retry after performing the appropriate action.
    pub const RETRY_WITH: HttpStatus = HttpStatus::vendor(449, "Retry With", "Microsoft");
    /// Extension (Microsoft). Windows Parental Controls block the page.
    pub const BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS: HttpStatus =
        HttpStatus::vendor(450, "Blocked By Windows Parental Controls", "Microsoft");
    /// The resource cannot legally be provided.
    pub const UNAVAILABLE_FOR_LEGAL_REASONS: HttpStatus =
        HttpStatus::standard(451, "Unavailable For Legal Reasons");
    /// Extension (Nginx). The client closed the connection while the server was still
    /// processing, so no header could be sent back.
    pub const CLIENT_CLOSED_REQUEST: HttpStatus =
        HttpStatus::vendor(499, "Client Closed Request", "Nginx");

    // 5xx
    /// An unexpected condition kept the server from fulfilling the request.
    pub const INTERNAL_SERVER_ERROR: HttpStatus =
        HttpStatus::standard(500, "Internal Server Error");
    /// The server does not support the method and cannot handle it.
    pub const NOT_IMPLEMENTED: HttpStatus = HttpStatus::standard(501, "Not Implemented");
    /// Acting as a gateway, the server got an invalid response upstream.
    pub const BAD_GATEWAY: HttpStatus = HttpStatus::standard(502, "Bad Gateway");
    /// The server is not ready to handle the request.
    pub const SERVICE_UNAVAILABLE: HttpStatus = HttpStatus::standard(503, "Service Unavailable");
    /// Acting as a gateway, the server did not get an upstream response in time.
    pub const GATEWAY_TIMEOUT: HttpStatus = HttpStatus::standard(504, "Gateway Timeout");
    /// The HTTP version of the request is not supported.
    pub const HTTP_VERSION_NOT_SUPPORTED: HttpStatus =
        HttpStatus::standard(505, "HTTP Version Not Supported");
    /// Configuration error: the chosen variant does its own content negotiation and
    /// so is not a proper endpoint.
    pub const VARIANT_ALSO_NEGOTIATES: HttpStatus =
        HttpStatus::standard(506, "Variant Also Negotiates");
    /// WebDAV. The server cannot store the representation needed to complete the
    /// request.
    pub const INSUFFICIENT_STORAGE: HttpStatus = HttpStatus::standard(507, "Insufficient Storage");
    /// WebDAV. The server found an infinite loop while processing the request.
    pub const LOOP_DETECTED: HttpStatus = HttpStatus::standard(508, "Loop Detected");
    /// The request needs further extensions before the server can fulfill it.
    pub const NOT_EXTENDED: HttpStatus = HttpStatus::standard(510, "Not Extended");
    /// The client must authenticate to gain network access.
    pub const NETWORK_AUTHENTICATION_REQUIRED: HttpStatus =
        HttpStatus::standard(511, "Network Authentication Required");

    /// Returns the canonical entry registered under `code`, if any.
    pub fn from_code(code: u16) -> Option<&'static HttpStatus> {
        let status = CATALOG.get(&code);
        if status.is_none() {
            debug!(code, "status code not in catalog");
        }
        status
    }

    /// Every registered entry, lowest code first.
    pub fn all() -> impl Iterator<Item = &'static HttpStatus> {
        CATALOG.values()
    }

    /// Returns a copy of this status carrying `message`. `self` is left as is.
    pub fn with_message(&self, message: impl Into<String>) -> HttpStatus {
        HttpStatus {
            message: Some(message.into()),
            ..self.clone()
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The server or vendor that defined a non-standard code.
    pub fn extension(&self) -> Option<&'static str> {
        self.extension
    }

    pub fn is_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn class(&self) -> Option<StatusClass> {
        match self.code {
            100..=199 => Some(StatusClass::Informational),
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }
}

/// Returns the canonical entry registered under `code`, if any.
pub fn lookup(code: u16) -> Option<&'static HttpStatus> {
    HttpStatus::from_code(code)
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.text)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl FromStr for HttpStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s
            .trim()
            .parse()
            .map_err(|_| ParseStatusError::InvalidCode(s.to_string()))?;
        HttpStatus::from_code(code)
            .cloned()
            .ok_or(ParseStatusError::UnknownCode(code))
    }
}

// Keyed by each entry's own code so the key and the descriptor cannot disagree.
static CATALOG: LazyLock<BTreeMap<u16, HttpStatus>> = LazyLock::new(|| {
    [
        HttpStatus::CONTINUE,
        HttpStatus::SWITCHING_PROTOCOLS,
        HttpStatus::PROCESSING,
        HttpStatus::EARLY_HINTS,
        HttpStatus::OK,
        HttpStatus::CREATED,
        HttpStatus::ACCEPTED,
        HttpStatus::NON_AUTHORITATIVE_INFORMATION,
        HttpStatus::NO_CONTENT,
        HttpStatus::RESET_CONTENT,
        HttpStatus::PARTIAL_CONTENT,
        HttpStatus::MULTI_STATUS,
        HttpStatus::ALREADY_REPORTED,
        HttpStatus::IM_USED,
        HttpStatus::MULTIPLE_CHOICES,
        HttpStatus::MOVED_PERMANENTLY,
        HttpStatus::FOUND,
        HttpStatus::SEE_OTHER,
        HttpStatus::NOT_MODIFIED,
        HttpStatus::USE_PROXY,
        HttpStatus::UNUSED,
        HttpStatus::TEMPORARY_REDIRECT,
        HttpStatus::PERMANENT_REDIRECT,
        HttpStatus::BAD_REQUEST,
        HttpStatus::UNAUTHORIZED,
        HttpStatus::PAYMENT_REQUIRED,
        HttpStatus::FORBIDDEN,
        HttpStatus::NOT_FOUND,
        HttpStatus::METHOD_NOT_ALLOWED,
        HttpStatus::NOT_ACCEPTABLE,
        HttpStatus::PROXY_AUTHENTICATION_REQUIRED,
        HttpStatus::REQUEST_TIMEOUT,
        HttpStatus::CONFLICT,
        HttpStatus::GONE,
        HttpStatus::LENGTH_REQUIRED,
        HttpStatus::PRECONDITION_FAILED,
        HttpStatus::REQUEST_ENTITY_TOO_LARGE,
        HttpStatus::REQUEST_URI_TOO_LONG,
        HttpStatus::UNSUPPORTED_MEDIA_TYPE,
        HttpStatus::REQUESTED_RANGE_NOT_SATISFIABLE,
        HttpStatus::EXPECTATION_FAILED,
        HttpStatus::IM_A_TEAPOT,
        HttpStatus::ENHANCE_YOUR_CALM,
        HttpStatus::UNPROCESSABLE_ENTITY,
        HttpStatus::LOCKED,
        HttpStatus::FAILED_DEPENDENCY,
        HttpStatus::TOO_EARLY,
        HttpStatus::UPGRADE_REQUIRED,
        HttpStatus::PRECONDITION_REQUIRED,
        HttpStatus::TOO_MANY_REQUESTS,
        HttpStatus::REQUEST_HEADER_FIELDS_TOO_LARGE,
        HttpStatus::NO_RESPONSE,
        HttpStatus::RETRY_WITH,
        HttpStatus::BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS,
        HttpStatus::UNAVAILABLE_FOR_LEGAL_REASONS,
        HttpStatus::CLIENT_CLOSED_REQUEST,
        HttpStatus::INTERNAL_SERVER_ERROR,
        HttpStatus::NOT_IMPLEMENTED,
        HttpStatus::BAD_GATEWAY,
        HttpStatus::SERVICE_UNAVAILABLE,
        HttpStatus::GATEWAY_TIMEOUT,
        HttpStatus::HTTP_VERSION_NOT_SUPPORTED,
        HttpStatus::VARIANT_ALSO_NEGOTIATES,
        HttpStatus::INSUFFICIENT_STORAGE,
        HttpStatus::LOOP_DETECTED,
        HttpStatus::NOT_EXTENDED,
        HttpStatus::NETWORK_AUTHENTICATION_REQUIRED,
    ]
    .into_iter()
    .map(|status| (status.code, status))
    .collect()
});
