mod session;

pub use session::SESSION_TTL;
pub use session::SessionStore;
