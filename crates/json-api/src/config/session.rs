//! Session Config

use clap::Args;

use pactas_shop_app::domain::carts::session::CART_ID_SESSION_KEY;

/// Cart session cookie settings.
#[derive(Debug, Clone, Args)]
pub struct SessionConfig {
    /// Name of the cookie holding the session's cart id
    #[arg(
        long = "session-cookie-name",
        env = "SESSION_COOKIE_NAME",
        default_value = CART_ID_SESSION_KEY
    )]
    pub cookie_name: String,

    /// Only send the session cookie over HTTPS
    #[arg(long = "session-cookie-secure", env = "SESSION_COOKIE_SECURE", default_value_t = false)]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: CART_ID_SESSION_KEY.to_string(),
            secure: false,
        }
    }
}
