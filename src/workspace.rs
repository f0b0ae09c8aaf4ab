//! Workspace State - The Shared Record

use serde::{Deserialize, Serialize};

/// One shareable playground session: template source, model source, and the
/// sample data bound to the model.
///
/// All three fields are always present; absence is the empty string, never an
/// omitted field. `data` holds serialized JSON but is carried as an opaque
/// string end-to-end - the codec never parses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub template_markdown: String,
    pub model_cto: String,
    pub data: String,
}

impl WorkspaceState {
    pub fn new(
        template_markdown: impl Into<String>,
        model_cto: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            template_markdown: template_markdown.into(),
            model_cto: model_cto.into(),
            data: data.into(),
        }
    }

    /// Field values in the fixed serialization order.
    pub(crate) fn fields(&self) -> [&str; 3] {
        [&self.template_markdown, &self.model_cto, &self.data]
    }

    pub(crate) fn from_fields(fields: [String; 3]) -> Self {
        let [template_markdown, model_cto, data] = fields;
        Self {
            template_markdown,
            model_cto,
            data,
        }
    }
}
