#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8080"  // Local dev server for the newsletter endpoint
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}
