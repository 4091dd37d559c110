pub mod http_client;
pub mod text;
pub mod url;

pub use http_client::StandardHttpClient;
pub use text::decode_lossy;
pub use url::UrlUtils;
