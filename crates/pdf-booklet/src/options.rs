use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    /// Physical sheet the booklet is printed on
    pub sheet_format: SheetFormat,

    /// How source pages are sized into their half of the sheet
    pub scaling_mode: ScalingMode,

    /// Draw a dashed line where the sheet is folded
    pub fold_line: bool,
}

impl BookletOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.sheet_format.paper()
        {
            let valid = |v: f32| v.is_finite() && v > 0.0;
            if !valid(width_mm) || !valid(height_mm) {
                return Err(BookletError::Config(format!(
                    "Custom paper size must be positive, got {} x {} mm",
                    width_mm, height_mm
                )));
            }
        }

        Ok(())
    }
}
