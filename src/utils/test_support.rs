/// True when the sandbox forbids binding a localhost listener, which
/// httpmock's mock server needs.
pub fn should_skip_httpmock() -> bool {
    match std::net::TcpListener::bind(("127.0.0.1", 0)) {
        Ok(listener) => {
            drop(listener);
            false
        }
        Err(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
            eprintln!("skipping httpmock test: cannot bind localhost in this sandbox");
            true
        }
        Err(err) => panic!("failed to probe localhost binding: {err}"),
    }
}
