mod body;
pub use body::CommitOnDrain;

mod handle;
pub use handle::handle;

mod server;
pub use server::Server;
