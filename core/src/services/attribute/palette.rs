//! Legend layout of the attribute settings form

use serde::Serialize;

/// Settings grouped by legend, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsPalette {
    pub presentation: Vec<&'static str>,
    pub functions: Vec<&'static str>,
    pub overview: Vec<&'static str>,
}

impl SettingsPalette {
    /// Palette of a langcode attribute
    ///
    /// `fe_template` is only offered when frontend editing is installed.
    pub fn langcode(frontend_editing: bool) -> Self {
        let mut presentation = vec!["tl_class", "be_template"];
        if frontend_editing {
            presentation.push("fe_template");
        }

        Self {
            presentation,
            functions: vec!["mandatory", "includeBlankOption"],
            overview: vec!["filterable", "searchable"],
        }
    }

    /// All settings across legends
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.presentation
            .iter()
            .chain(&self.functions)
            .chain(&self.overview)
            .copied()
    }
}
