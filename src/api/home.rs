pub const GREETING: &str = "Hello World from bundle.social!";

/// GET / - static greeting
pub async fn index() -> &'static str {
    GREETING
}
