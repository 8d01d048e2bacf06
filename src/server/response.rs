use may_minihttp::Response;

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

/// Write a dispatch outcome to the wire.
///
/// Every response is marked `Connection: close`; the transport does not
/// multiplex application routing state over reused connections.
pub fn write_response(res: &mut Response, status: u16, body: Vec<u8>) {
    res.status_code(status as usize, status_reason(status));
    res.header("Connection: close");
    if !body.is_empty() {
        res.body_vec(body);
    }
}
