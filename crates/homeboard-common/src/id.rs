/// Generate a fresh widget id (UUID v4, string form).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
