//! Display-name overrides for result groups.

use anyhow::Result;

/// Ordered table of raw group name → display title. Raw names match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAliases {
    entries: Vec<(String, String)>,
}

impl Default for GroupAliases {
    fn default() -> Self {
        Self::new(vec![("1win".to_string(), "Professor Anish".to_string())])
    }
}

impl GroupAliases {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Parses `raw=Title;raw2=Title2`. Blank segments are skipped; an empty string yields an empty table.
    pub fn parse(table: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for segment in table.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            let Some((raw, title)) = segment.split_once('=') else {
                anyhow::bail!("GROUP_ALIASES entry has no '=': {}", segment);
            };
            let (raw, title) = (raw.trim(), title.trim());
            if raw.is_empty() || title.is_empty() {
                anyhow::bail!("GROUP_ALIASES entry has an empty side: {}", segment);
            }
            entries.push((raw.to_string(), title.to_string()));
        }
        Ok(Self::new(entries))
    }

    /// Title to show for `group`: the first matching alias, else the raw name.
    pub fn display_name<'a>(&'a self, group: &'a str) -> &'a str {
        let lowered = group.to_lowercase();
        self.entries
            .iter()
            .find(|(raw, _)| raw.to_lowercase() == lowered)
            .map(|(_, title)| title.as_str())
            .unwrap_or(group)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alias_case_insensitive() {
        let aliases = GroupAliases::default();
        assert_eq!(aliases.display_name("1win"), "Professor Anish");
        assert_eq!(aliases.display_name("1WIN"), "Professor Anish");
        assert_eq!(aliases.display_name("1Win"), "Professor Anish");
    }

    #[test]
    fn test_other_names_unchanged() {
        let aliases = GroupAliases::default();
        assert_eq!(aliases.display_name("VK 2020"), "VK 2020");
        assert_eq!(aliases.display_name("1win leak"), "1win leak");
    }

    #[test]
    fn test_parse_multiple_entries() {
        let aliases = GroupAliases::parse(" 1win = Professor Anish ; vk=VKontakte;").unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases.display_name("VK"), "VKontakte");
        assert_eq!(aliases.display_name("1win"), "Professor Anish");
    }

    #[test]
    fn test_parse_empty_disables_aliasing() {
        let aliases = GroupAliases::parse("").unwrap();
        assert!(aliases.is_empty());
        assert_eq!(aliases.display_name("1win"), "1win");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(GroupAliases::parse("1win").is_err());
        assert!(GroupAliases::parse("=Title").is_err());
        assert!(GroupAliases::parse("raw=").is_err());
    }
}
