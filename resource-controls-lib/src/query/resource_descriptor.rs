use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};

/// Provider evidence that a resource exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    pub name: String,
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
}

impl ResourceDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            provisioning_state: None,
            kubernetes_version: None,
        }
    }
}

impl Display for ResourceDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "'{}'", self.name)?;

        let extras: Vec<String> = [
            (!self.location.is_empty()).then(|| self.location.clone()),
            self.provisioning_state.as_ref().map(|state| format!("provisioning state {state}")),
            self.kubernetes_version.as_ref().map(|version| format!("Kubernetes {version}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !extras.is_empty() {
            write!(f, " ({})", extras.join(", "))?;
        }
        Ok(())
    }
}
