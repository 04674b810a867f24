//! Outcome codes and their status table.

/// Severity of an outcome.
///
/// The class decides what happens after the log line is written: `Info`
/// returns to the caller, `Warn` ends one connection worker, `Ouch` ends
/// the whole server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Info,
    Warn,
    Ouch,
}

/// One row of the status table.
#[derive(Debug)]
pub struct StatusRecord {
    /// Severity class.
    pub class: Class,
    /// Canonical HTTP status reported to clients.
    pub http: u16,
    /// Directional marker shown in log lines.
    pub figure: &'static str,
    /// Human label prefixed to log lines.
    pub tag: &'static str,
}

/// The closed set of connection outcomes.
///
/// Every variant indexes a fixed row of an internal table built at
/// compile time and never mutated.
///
/// # Example
///
/// ```
/// # use cloth::http::status::Outcome;
/// assert_eq!(Outcome::BadRequest.status().http, 400);
/// assert_eq!(Outcome::NoMethod.status().http, 501);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A file is being sent to the client.
    Response,
    /// A connection was received.
    Accept,
    /// The request was empty, unreadable, or otherwise malformed.
    BadRequest,
    /// The resource does not exist.
    NotFound,
    /// The request used a method other than GET.
    BadMethod,
    /// The request filled the read buffer exactly and may be truncated.
    Overflow,
    /// The request was understood but the file could not be opened.
    Error,
    /// The resource's extension is not in the table.
    NoMethod,
    /// The server itself cannot continue.
    Fatal,
}

static STATUS: [StatusRecord; 9] = [
    StatusRecord { class: Class::Info, http: 200, figure: "--->", tag: "INFO" }, // Response
    StatusRecord { class: Class::Info, http: 202, figure: "<---", tag: "INFO" }, // Accept
    StatusRecord { class: Class::Warn, http: 400, figure: "x---", tag: "WARN" }, // BadRequest
    StatusRecord { class: Class::Warn, http: 404, figure: "?---", tag: "WARN" }, // NotFound
    StatusRecord { class: Class::Warn, http: 405, figure: "x---", tag: "WARN" }, // BadMethod
    StatusRecord { class: Class::Warn, http: 431, figure: "+---", tag: "WARN" }, // Overflow
    StatusRecord { class: Class::Warn, http: 500, figure: "---x", tag: "WARN" }, // Error
    StatusRecord { class: Class::Warn, http: 501, figure: "---?", tag: "WARN" }, // NoMethod
    StatusRecord { class: Class::Ouch, http: 555, figure: "xxxx", tag: "OUCH" }, // Fatal
];

impl Outcome {
    /// The table row for this outcome.
    pub fn status(self) -> &'static StatusRecord {
        &STATUS[self as usize]
    }
}
