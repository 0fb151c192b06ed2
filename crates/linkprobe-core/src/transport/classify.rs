//! Map curl errors into transport failure categories.

use super::TransportError;

/// Classify a curl error. `status` is the response code reported by the
/// handle, if any (0 is treated as "no response" by the caller).
pub fn classify_curl_error(e: &curl::Error, status: Option<u16>) -> TransportError {
    let message = e.to_string();
    if e.is_too_many_redirects() {
        return TransportError::TooManyRedirects(message);
    }
    if e.is_operation_timedout() {
        return TransportError::Timeout(message);
    }
    if e.is_http_returned_error() {
        return TransportError::ClientError { status, message };
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_ssl_certproblem()
        || e.is_ssl_cacert()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportError::Request(message);
    }
    TransportError::Other(message)
}
