use super::contract::Action;
use super::run_glif::RunGlifAction;
use std::sync::Arc;

/// What the host registers: a named bundle of actions.
#[derive(Clone)]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub actions: Vec<Arc<dyn Action>>,
}

impl Plugin {
    /// Find an action by its name or one of its similes.
    pub fn action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions
            .iter()
            .find(|action| action.name() == name || action.similes().contains(&name))
            .cloned()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field("description", &self.description)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The `glif` plugin with a given `RUN_GLIF` action.
pub fn glif_plugin_with(action: RunGlifAction) -> Plugin {
    Plugin {
        name: "glif".to_string(),
        description: "Run Glifs via the Glif API".to_string(),
        actions: vec![Arc::new(action)],
    }
}

pub fn glif_plugin() -> Plugin {
    glif_plugin_with(RunGlifAction::new())
}
