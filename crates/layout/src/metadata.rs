use chrono::NaiveDate;
use obra_types::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Header and footer data printed on the budget.
///
/// `client_name`, `builder_name` and `builder_phone` are required. The address and the
/// legend are printed only when they hold visible text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub client_name: String,
    pub builder_name: String,
    pub builder_phone: String,
    #[serde(default)]
    pub builder_address: Option<String>,
    #[serde(default)]
    pub legend: Option<String>,
    /// Printed date. When unset, the local date at pagination time is used.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Raw logo bytes (PNG, JPEG or GIF).
    #[serde(skip)]
    pub logo: Option<Vec<u8>>,
}

impl ReportMetadata {
    pub fn new(
        client_name: impl Into<String>,
        builder_name: impl Into<String>,
        builder_phone: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            builder_name: builder_name.into(),
            builder_phone: builder_phone.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.builder_address = Some(address.into());
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_logo(mut self, bytes: Vec<u8>) -> Self {
        self.logo = Some(bytes);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("clientName", Some(self.client_name.as_str()))?;
        require_text("builderName", Some(self.builder_name.as_str()))?;
        require_text("builderPhone", Some(self.builder_phone.as_str()))?;
        Ok(())
    }

    pub fn resolved_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn address(&self) -> Option<&str> {
        non_blank(self.builder_address.as_deref())
    }

    pub fn legend_text(&self) -> Option<&str> {
        non_blank(self.legend.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
