use ds_core::Password;

/// Initial administrator created at startup
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub name: String,
    pub password: Password,
}
