// Copyright 2020 - developers of the `oxigram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use oxigram_tl_types as tl;
use std::fmt;
use std::io;

/// The error type reported by the server when a request is misused.
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,

    /// The ASCII error name, normally in screaming snake case.
    pub name: String,

    /// If the error contained an additional value, it will be present here.
    pub value: Option<u32>,

    /// The name of the request that triggered this error.
    /// Won't be present if the error was artificially constructed.
    pub caused_by: Option<&'static str>,
}

impl std::error::Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.name)?;
        if let Some(caused_by) = self.caused_by {
            write!(f, " caused by {caused_by}")?;
        }
        if let Some(value) = self.value {
            write!(f, " (value: {value})")?;
        }
        Ok(())
    }
}

impl RpcError {
    /// Builds the error from the code and message the server replied with.
    ///
    /// The first run of digits in the message, if any, is taken out of the
    /// name and stored as the [`RpcError::value`], so that `FLOOD_WAIT_31`
    /// becomes the name `FLOOD_WAIT` with value `31`.
    pub fn new(code: i32, message: &str) -> Self {
        let digits = message
            .split(|c: char| !c.is_ascii_digit())
            .find(|s| !s.is_empty());

        match digits.and_then(|d| d.parse::<u32>().ok().map(|v| (d, v))) {
            Some((digits, value)) => Self {
                code,
                name: message.replacen(&format!("_{digits}"), "", 1),
                value: Some(value),
                caused_by: None,
            },
            None => Self {
                code,
                name: message.to_string(),
                value: None,
                caused_by: None,
            },
        }
    }

    /// Matches on the name of the RPC error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error name starts (or ends with) the input parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(oxigram_mtsender::RpcError::new(
    /// #     400, "STARGIFT_INVALID"));
    /// #
    /// match request_result {
    ///     Err(rpc_err) if rpc_err.is("PEER_ID_INVALID") => panic!(),
    ///     Err(rpc_err) if rpc_err.is("STARGIFT_*") => {},
    ///     _ => panic!()
    /// }
    /// ```
    pub fn is(&self, rpc_error: &str) -> bool {
        if let Some(rpc_error) = rpc_error.strip_suffix('*') {
            self.name.starts_with(rpc_error)
        } else if let Some(rpc_error) = rpc_error.strip_prefix('*') {
            self.name.ends_with(rpc_error)
        } else {
            self.name == rpc_error
        }
    }

    pub fn with_caused_by(mut self, request: &tl::Request) -> Self {
        self.caused_by = Some(request.innermost().name());
        self
    }
}

/// This error occurs when a Remote Procedure call was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// The request invocation failed because it was invalid or the server
    /// could not process it successfully.
    Rpc(RpcError),

    /// The request was cancelled or dropped, and the results won't arrive.
    Dropped,

    /// The connection failed while the request was in flight.
    Io(io::Error),

    /// The response arrived but is not of the kind the request returns.
    Deserialize(tl::UnexpectedResponse),
}

impl std::error::Error for InvocationError {}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(err) => write!(f, "request error: {err}"),
            Self::Dropped => write!(f, "request error: dropped (cancelled)"),
            Self::Io(err) => write!(f, "request error, IO failed: {err}"),
            Self::Deserialize(err) => write!(f, "request error, bad response: {err}"),
        }
    }
}

impl From<RpcError> for InvocationError {
    fn from(error: RpcError) -> Self {
        Self::Rpc(error)
    }
}

impl From<io::Error> for InvocationError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<tl::UnexpectedResponse> for InvocationError {
    fn from(error: tl::UnexpectedResponse) -> Self {
        Self::Deserialize(error)
    }
}

impl InvocationError {
    /// Matches on the name of the RPC error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error name starts (or ends with) the input parameter.
    ///
    /// If the error is not a RPC error, returns `false`.
    #[inline]
    pub fn is(&self, rpc_error: &str) -> bool {
        match self {
            Self::Rpc(rpc) => rpc.is(rpc_error),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_rpc_error_parsing() {
        assert_eq!(
            RpcError::new(400, "CHAT_INVALID"),
            RpcError {
                code: 400,
                name: "CHAT_INVALID".into(),
                value: None,
                caused_by: None,
            }
        );

        assert_eq!(
            RpcError::new(420, "FLOOD_WAIT_31"),
            RpcError {
                code: 420,
                name: "FLOOD_WAIT".into(),
                value: Some(31),
                caused_by: None,
            }
        );

        assert_eq!(
            RpcError::new(500, "INTERDC_2_CALL_ERROR"),
            RpcError {
                code: 500,
                name: "INTERDC_CALL_ERROR".into(),
                value: Some(2),
                caused_by: None,
            }
        );
    }

    #[test]
    fn check_rpc_error_matching() {
        let error = RpcError::new(400, "STARGIFT_USAGE_LIMITED");
        assert!(error.is("STARGIFT_USAGE_LIMITED"));
        assert!(error.is("STARGIFT_*"));
        assert!(error.is("*_LIMITED"));
        assert!(!error.is("STARGIFT_INVALID"));

        let error = InvocationError::from(error);
        assert!(error.is("STARGIFT_*"));
        assert!(!InvocationError::Dropped.is("STARGIFT_*"));
    }

    #[test]
    fn check_caused_by_uses_innermost_request() {
        let request = tl::Request::from(tl::functions::InvokeWithBusinessConnection {
            connection_id: "biz".into(),
            query: tl::functions::payments::GetStarGifts { hash: 0 },
        });
        let error = RpcError::new(400, "BUSINESS_CONNECTION_INVALID").with_caused_by(&request);
        assert_eq!(error.caused_by, Some("payments.getStarGifts"));
        assert_eq!(
            error.to_string(),
            "rpc error 400: BUSINESS_CONNECTION_INVALID caused by payments.getStarGifts"
        );
    }
}
