pub mod assets;
pub mod profiles;
pub mod server;

pub use profiles::ProfileService;
pub use server::ServerService;
