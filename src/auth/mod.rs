// Client-side session: token storage, the session store built on it,
// and the route guard that reads it.

pub mod errors;
pub mod guard;
pub mod session;
pub mod storage;

pub use errors::StorageError;
pub use guard::{GuardEvent, Route, RouteGuard};
pub use session::{Session, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
pub use storage::{FileStorage, MemoryStorage, TokenStorage};
