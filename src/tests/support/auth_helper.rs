use uuid::Uuid;

/// The only token the stub session resolver accepts.
pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ADMIN_EMAIL: &str = "owner@example.com";
pub const TEST_ADMIN_ID: Uuid = Uuid::from_u128(0x5a1e_0000_0000_4000_8000_0000_0000_0001);

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_TOKEN}"))
}
