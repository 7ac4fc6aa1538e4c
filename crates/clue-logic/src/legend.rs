//! Room legend — maps single-character layout codes to room names.
//!
//! Source format, one entry per line:
//!
//! ```text
//! K, Kitchen, Card
//! W, Walkway, Other
//! ```
//!
//! The entry named [`WALKWAY_NAME`] marks the code used for walkway cells.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{kind_tags, LEGEND_SEPARATOR, WALKWAY_NAME};
use crate::error::{BoardError, FormatError, Result};

/// Whether a legend entry is a playable room card or board-only space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    Card,
    Other,
}

impl RoomKind {
    /// Match a kind tag by substring, so `"Card"` and `"Cards"` both count.
    fn from_tag(tag: &str) -> Option<Self> {
        if tag.contains(kind_tags::CARD) {
            Some(RoomKind::Card)
        } else if tag.contains(kind_tags::OTHER) {
            Some(RoomKind::Other)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub kind: RoomKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    entries: BTreeMap<char, LegendEntry>,
    walkway: Option<char>,
}

impl Legend {
    /// Parse legend text. Blank lines are ignored.
    pub fn parse(source: &str) -> std::result::Result<Self, FormatError> {
        let mut legend = Legend::default();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let text = raw.trim_end();
            if text.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = text.split(LEGEND_SEPARATOR).map(str::trim).collect();
            if fields.len() != 3 {
                return Err(FormatError::FieldCount {
                    line,
                    found: fields.len(),
                });
            }

            let mut code_chars = fields[0].chars();
            let code = match (code_chars.next(), code_chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(FormatError::BadLegendCode {
                        line,
                        code: fields[0].to_string(),
                    })
                }
            };

            let kind = RoomKind::from_tag(fields[2]).ok_or_else(|| FormatError::UnknownKind {
                line,
                tag: fields[2].to_string(),
            })?;

            if legend.entries.contains_key(&code) {
                return Err(FormatError::DuplicateCode { line, code });
            }

            let name = fields[1].to_string();
            if name == WALKWAY_NAME {
                if let Some(first) = legend.walkway {
                    return Err(FormatError::DuplicateWalkway { line, first, code });
                }
                legend.walkway = Some(code);
            }
            legend.entries.insert(code, LegendEntry { name, kind });
        }

        if legend.walkway.is_none() {
            log::warn!("legend has no `{}` entry; no cell will be walkable", WALKWAY_NAME);
        }
        Ok(legend)
    }

    /// Read and parse a legend file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| BoardError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let legend = Self::parse(&source)?;
        log::info!("Loaded legend {} ({} rooms)", path.display(), legend.len());
        Ok(legend)
    }

    /// Room name for a code.
    pub fn name(&self, code: char) -> Option<&str> {
        self.entries.get(&code).map(|e| e.name.as_str())
    }

    pub fn entry(&self, code: char) -> Option<&LegendEntry> {
        self.entries.get(&code)
    }

    pub fn contains(&self, code: char) -> bool {
        self.entries.contains_key(&code)
    }

    /// Code of the walkway entry, if the legend defines one.
    pub fn walkway_code(&self) -> Option<char> {
        self.walkway
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &LegendEntry)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }

    /// Plain code → name mapping.
    pub fn names(&self) -> HashMap<char, String> {
        self.entries
            .iter()
            .map(|(c, e)| (*c, e.name.clone()))
            .collect()
    }

    /// Names of rooms tagged as cards, in code order.
    pub fn card_rooms(&self) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| e.kind == RoomKind::Card)
            .map(|e| e.name.as_str())
            .collect()
    }
}
