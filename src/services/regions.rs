//! Region canonicalization.

use crate::models::RegionAliasTable;

/// Map `raw` through `table` when `enabled`, otherwise return it unchanged.
///
/// Labels without an alias are returned unchanged.
pub fn canonicalize(table: &RegionAliasTable, raw: &str, enabled: bool) -> String {
    if !enabled {
        return raw.to_string();
    }
    table.get(raw).unwrap_or(raw).to_string()
}

/// Alias table bundled with the run's canonicalization toggle.
#[derive(Debug, Clone, Default)]
pub struct RegionCanonicalizer {
    table: RegionAliasTable,
    enabled: bool,
}

impl RegionCanonicalizer {
    pub fn new(table: RegionAliasTable, enabled: bool) -> Self {
        Self { table, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn canonicalize(&self, raw: &str) -> String {
        canonicalize(&self.table, raw, self.enabled)
    }
}
