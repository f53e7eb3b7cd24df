pub const DEFAULT_PREVIEW_ABILITY: &str = "preview";

/// Ability names checked by an external policy enforcer. Each tier falls back
/// to the one before it: main, create, edit, preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abilities {
    pub main: Option<String>,
    pub create: Option<String>,
    pub edit: Option<String>,
    pub preview: Option<String>,
}

impl Abilities {
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn create(&self) -> Option<&str> {
        self.create.as_deref().or_else(|| self.main())
    }

    pub fn edit(&self) -> Option<&str> {
        self.edit.as_deref().or_else(|| self.create())
    }

    pub fn preview(&self) -> &str {
        self.preview
            .as_deref()
            .or_else(|| self.edit())
            .unwrap_or(DEFAULT_PREVIEW_ABILITY)
    }
}
