//! # World Data
//!
//! Permanent records: nuclei, and the souls and spaces that belong to them.
//! The navigation controller only talks to the `DataStore` trait; `World` is
//! the in-memory implementation the app ships with.
//!
//! Export format (JSON):
//!
//! ```text
//! { "version": 1,
//!   "nuclei": [ { "id", "name", "created_at",
//!                 "souls":  [ { "id", "name", "type" } ],
//!                 "spaces": [ { "id", "name", "type" } ] } ] }
//! ```

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown nucleus: {0}")]
    UnknownNucleus(String),
    #[error("malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Soul {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Top-level record grouping souls and spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nucleus {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    #[serde(default)]
    pub souls: Vec<Soul>,
    #[serde(default)]
    pub spaces: Vec<Space>,
}

impl Nucleus {
    /// Name for display; unnamed nuclei are common right after the wizard.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "(unnamed nucleus)" } else { &self.name }
    }
}

pub trait DataStore {
    fn new_nucleus(&mut self) -> &mut Nucleus;

    fn new_soul(&mut self, nucleus_id: &str) -> Result<&mut Soul, DataError>;

    fn new_space(&mut self, nucleus_id: &str) -> Result<&mut Space, DataError>;

    fn nucleus(&self, id: &str) -> Option<&Nucleus>;

    /// All nuclei in creation order.
    fn nuclei(&self) -> &[Nucleus];

    /// Replace the contents with a previous `export()`. `None` or an empty
    /// string means nothing was stored yet.
    fn import(&mut self, serialized: Option<&str>) -> Result<(), DataError>;

    fn export(&self) -> Result<String, DataError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct WorldFile {
    version: u32,
    nuclei: Vec<Nucleus>,
}

/// In-memory `DataStore`.
#[derive(Debug, Default)]
pub struct World {
    nuclei: Vec<Nucleus>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    fn nucleus_mut(&mut self, id: &str) -> Result<&mut Nucleus, DataError> {
        self.nuclei
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DataError::UnknownNucleus(id.to_string()))
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl DataStore for World {
    fn new_nucleus(&mut self) -> &mut Nucleus {
        let nucleus = Nucleus {
            id: new_id(),
            name: String::new(),
            created_at: Utc::now().timestamp(),
            souls: Vec::new(),
            spaces: Vec::new(),
        };
        debug!("New nucleus {}", nucleus.id);
        self.nuclei.push(nucleus);
        let last = self.nuclei.len() - 1;
        &mut self.nuclei[last]
    }

    fn new_soul(&mut self, nucleus_id: &str) -> Result<&mut Soul, DataError> {
        let nucleus = self.nucleus_mut(nucleus_id)?;
        nucleus.souls.push(Soul {
            id: new_id(),
            name: String::new(),
            kind: String::new(),
        });
        let last = nucleus.souls.len() - 1;
        Ok(&mut nucleus.souls[last])
    }

    fn new_space(&mut self, nucleus_id: &str) -> Result<&mut Space, DataError> {
        let nucleus = self.nucleus_mut(nucleus_id)?;
        nucleus.spaces.push(Space {
            id: new_id(),
            name: String::new(),
            kind: String::new(),
        });
        let last = nucleus.spaces.len() - 1;
        Ok(&mut nucleus.spaces[last])
    }

    fn nucleus(&self, id: &str) -> Option<&Nucleus> {
        self.nuclei.iter().find(|n| n.id == id)
    }

    fn nuclei(&self) -> &[Nucleus] {
        &self.nuclei
    }

    fn import(&mut self, serialized: Option<&str>) -> Result<(), DataError> {
        let Some(text) = serialized.map(str::trim).filter(|t| !t.is_empty()) else {
            self.nuclei.clear();
            return Ok(());
        };
        let file: WorldFile = serde_json::from_str(text)?;
        self.nuclei = file.nuclei;
        Ok(())
    }

    fn export(&self) -> Result<String, DataError> {
        let file = WorldFile {
            version: DATA_VERSION,
            nuclei: self.nuclei.clone(),
        };
        Ok(serde_json::to_string(&file)?)
    }
}
