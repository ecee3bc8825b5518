//! Inputs accepted by the authentication service

/// Registration details for a new member
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Email/password pair presented at signin
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
