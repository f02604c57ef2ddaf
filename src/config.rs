/// The column used when an entity does not name one
pub const DEFAULT_SOFT_DELETE_COLUMN: &str = "soft_deleted_at";

/// Soft delete settings of an entity, fixed at compile time.
///
/// ```
/// use sea_orm_soft_delete::SoftDeleteConfig;
///
/// const DEFAULT: SoftDeleteConfig = SoftDeleteConfig::new();
/// assert_eq!(DEFAULT.column_name(), "soft_deleted_at");
///
/// const CUSTOM: SoftDeleteConfig = SoftDeleteConfig::new().column("deleted_at");
/// assert_eq!(CUSTOM.column_name(), "deleted_at");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoftDeleteConfig {
    column: &'static str,
}

impl SoftDeleteConfig {
    /// Settings with every option at its default
    pub const fn new() -> Self {
        Self {
            column: DEFAULT_SOFT_DELETE_COLUMN,
        }
    }

    /// Use another column, by its name in the database
    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = column;
        self
    }

    /// Name of the soft delete column
    pub const fn column_name(&self) -> &'static str {
        self.column
    }
}

impl Default for SoftDeleteConfig {
    fn default() -> Self {
        Self::new()
    }
}
