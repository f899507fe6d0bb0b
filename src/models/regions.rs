//! Region alias table.
//!
//! Maps raw region labels from the city list onto the official names of
//! Russia's federal subjects. The federal cities are folded into the subject
//! that surrounds them, and republics written by their short name are
//! expanded to the full form.

use std::collections::HashMap;

/// Built-in raw label to canonical label pairs.
pub const REGION_ALIASES: &[(&str, &str)] = &[
    // Federal cities
    ("Москва", "Московская область"),
    ("Санкт-Петербург", "Ленинградская область"),
    ("Севастополь", "Республика Крым"),
    // Republics
    ("Адыгея", "Республика Адыгея"),
    ("Алтай", "Республика Алтай"),
    ("Башкортостан", "Республика Башкортостан"),
    ("Бурятия", "Республика Бурятия"),
    ("Дагестан", "Республика Дагестан"),
    ("Ингушетия", "Республика Ингушетия"),
    ("Кабардино-Балкария", "Кабардино-Балкарская Республика"),
    ("Калмыкия", "Республика Калмыкия"),
    ("Карачаево-Черкесия", "Карачаево-Черкесская Республика"),
    ("Карелия", "Республика Карелия"),
    ("Коми", "Республика Коми"),
    ("Крым", "Республика Крым"),
    ("Марий Эл", "Республика Марий Эл"),
    ("Мордовия", "Республика Мордовия"),
    ("Северная Осетия", "Республика Северная Осетия–Алания"),
    ("Татарстан", "Республика Татарстан"),
    ("Тыва", "Республика Тыва"),
    ("Удмуртия", "Удмуртская Республика"),
    ("Хакасия", "Республика Хакасия"),
    ("Чечня", "Чеченская Республика"),
    ("Чувашия", "Чувашская Республика"),
    ("Якутия", "Республика Саха"),
];

/// Immutable lookup from raw region label to canonical label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionAliasTable {
    aliases: HashMap<String, String>,
}

impl RegionAliasTable {
    /// Build a table from raw/canonical pairs. Later pairs win on duplicates.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(raw, canonical)| (raw.into(), canonical.into()))
                .collect(),
        }
    }

    /// Return a copy of this table extended with extra pairs.
    ///
    /// Extra pairs replace built-in entries with the same raw label.
    pub fn with_overrides<'a, I>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut aliases = self.aliases.clone();
        for (raw, canonical) in extra {
            aliases.insert(raw.clone(), canonical.clone());
        }
        Self { aliases }
    }

    /// Canonical label for `raw`, if any.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.aliases.get(raw).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Iterate over canonical labels.
    pub fn canonical_labels(&self) -> impl Iterator<Item = &str> {
        self.aliases.values().map(String::as_str)
    }
}

impl Default for RegionAliasTable {
    fn default() -> Self {
        Self::from_pairs(REGION_ALIASES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_every_alias() {
        let table = RegionAliasTable::default();
        assert_eq!(table.len(), REGION_ALIASES.len());
        assert_eq!(table.get("Москва"), Some("Московская область"));
        assert_eq!(table.get("Якутия"), Some("Республика Саха"));
    }

    #[test]
    fn test_builtin_raw_labels_are_unique() {
        let mut raws: Vec<_> = REGION_ALIASES.iter().map(|(raw, _)| *raw).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), REGION_ALIASES.len());
    }

    #[test]
    fn test_no_canonical_label_is_also_raw() {
        let table = RegionAliasTable::default();
        for canonical in table.canonical_labels() {
            assert_eq!(table.get(canonical), None, "{canonical} is also a key");
        }
    }

    #[test]
    fn test_overrides_replace_and_extend() {
        let extra: HashMap<String, String> = [
            ("Москва".to_string(), "город Москва".to_string()),
            ("ХМАО".to_string(), "Ханты-Мансийский автономный округ".to_string()),
        ]
        .into_iter()
        .collect();

        let table = RegionAliasTable::default().with_overrides(&extra);
        assert_eq!(table.get("Москва"), Some("город Москва"));
        assert_eq!(
            table.get("ХМАО"),
            Some("Ханты-Мансийский автономный округ")
        );
        assert_eq!(table.len(), REGION_ALIASES.len() + 1);
    }
}
