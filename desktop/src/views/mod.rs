mod login;
pub use login::Login;

mod portal;
pub use portal::Portal;
