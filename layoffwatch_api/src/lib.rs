mod client;
mod errors;
pub use self::client::Client;
pub use self::errors::Error;
