//! The JSON budget file read and written by the command line tool.

use crate::error::PipelineError;
use crate::template::starter_items;
use chrono::NaiveDate;
use obra_layout::{ReportLayout, ReportMetadata};
use obra_pricing::AdjustmentParameters;
use obra_types::LineItem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderInfo {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// One budget: its items, the adjustment percentages, and what to print around them.
///
/// ```json
/// {
///   "name": "Vivienda 60 m2",
///   "client": { "name": "Ana Torres" },
///   "builder": { "name": "Construcciones Ruiz", "phone": "0991234567" },
///   "adjustments": { "indirectPct": 10, "discountPct": 5, "vatPct": 15, "advancePct": 50 },
///   "items": [ { "code": "MAN-001", "description": "Muro bloque", "unit": "m²",
///                "unitPrice": 18.5, "quantity": 40 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetFile {
    pub name: String,
    pub client: ClientInfo,
    pub builder: BuilderInfo,
    #[serde(default)]
    pub adjustments: AdjustmentParameters,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    /// Logo image path, relative to the budget file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ReportLayout>,
}

impl BudgetFile {
    /// A new budget pre-filled with the starter catalog, all quantities zero.
    pub fn starter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client: ClientInfo::default(),
            builder: BuilderInfo::default(),
            adjustments: AdjustmentParameters::default(),
            items: starter_items(),
            legend: None,
            logo: None,
            date: None,
            layout: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        log::debug!("Loading budget from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// File name for the printed budget: the budget name with spaces replaced by `_`.
    pub fn output_file_name(&self) -> String {
        format!("{}.pdf", self.name.trim().replace(' ', "_"))
    }

    pub fn report_layout(&self) -> ReportLayout {
        self.layout.clone().unwrap_or_default()
    }

    /// Builds the report metadata, reading the logo relative to `base_dir`.
    ///
    /// A logo path that cannot be read is an error; a logo that cannot be decoded is
    /// reported later as a warning by pagination.
    pub fn metadata(&self, base_dir: &Path) -> Result<ReportMetadata, PipelineError> {
        let mut metadata = ReportMetadata::new(
            self.client.name.clone(),
            self.builder.name.clone(),
            self.builder.phone.clone(),
        );
        metadata.builder_address = self.builder.address.clone();
        metadata.legend = self.legend.clone();
        metadata.date = self.date;
        if let Some(logo) = &self.logo {
            let path = base_dir.join(logo);
            log::debug!("Reading logo from {}", path.display());
            metadata.logo = Some(fs::read(&path)?);
        }
        Ok(metadata)
    }
}
