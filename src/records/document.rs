use std::{io::ErrorKind, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fs::operations::read_shared;

use super::entities::HabitEntity;

/// Both shapes a habit document comes in: the export envelope or a plain list of habits.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Export {
        #[serde(rename = "exportDate", default)]
        export_date: Option<String>,
        habits: Vec<HabitEntity>,
    },
    List(Vec<HabitEntity>),
}

#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
#[serde(from = "DocumentRepr", rename_all = "camelCase")]
pub struct HabitsDocument {
    pub export_date: Option<String>,
    pub habits: Vec<HabitEntity>,
}

impl From<DocumentRepr> for HabitsDocument {
    fn from(value: DocumentRepr) -> Self {
        match value {
            DocumentRepr::Export {
                export_date,
                habits,
            } => Self {
                export_date,
                habits,
            },
            DocumentRepr::List(habits) => Self {
                export_date: None,
                habits,
            },
        }
    }
}

impl HabitsDocument {
    pub fn find(&self, selector: &str) -> Option<&HabitEntity> {
        self.habits.iter().find(|v| v.matches(selector))
    }

    /// Every habit when there is no selector, otherwise the single matching one.
    pub fn select(&self, selector: Option<&str>) -> Result<Vec<&HabitEntity>> {
        match selector {
            None => Ok(self.habits.iter().collect()),
            Some(selector) => self
                .find(selector)
                .map(|v| vec![v])
                .ok_or_else(|| anyhow!("No habit with id or name {selector:?}")),
        }
    }
}

/// Loads a habit document from disk.
pub async fn load_document(path: &Path) -> Result<HabitsDocument> {
    let content = match read_shared(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("Habit document {path:?} doesn't exist")
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {path:?}")),
    };

    let document = serde_json::from_str::<HabitsDocument>(&content)
        .with_context(|| format!("Failed to parse habit document {path:?}"))?;

    debug!(
        "Loaded {} habits from {path:?}, exported at {:?}",
        document.habits.len(),
        document.export_date
    );
    Ok(document)
}
