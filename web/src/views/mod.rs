mod shell;
pub use shell::AppShell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod reset_password;
pub use reset_password::ResetPassword;

mod signup;
pub use signup::Signup;
