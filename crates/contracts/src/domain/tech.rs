use serde::{Deserialize, Serialize};

/// Single entry of the tech-stack section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechItem {
    pub name: String,
    /// Key into the frontend icon dispatch table.
    pub icon: String,
    pub category: TechCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Cloud,
    Tools,
}

impl TechCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "frontend",
            TechCategory::Backend => "backend",
            TechCategory::Database => "database",
            TechCategory::Cloud => "cloud",
            TechCategory::Tools => "tools",
        }
    }

    /// Message key for the category heading.
    pub fn label_key(&self) -> &'static str {
        match self {
            TechCategory::Frontend => "stack.category.frontend",
            TechCategory::Backend => "stack.category.backend",
            TechCategory::Database => "stack.category.database",
            TechCategory::Cloud => "stack.category.cloud",
            TechCategory::Tools => "stack.category.tools",
        }
    }

    /// All categories in display order.
    pub fn all() -> [TechCategory; 5] {
        [
            TechCategory::Frontend,
            TechCategory::Backend,
            TechCategory::Database,
            TechCategory::Cloud,
            TechCategory::Tools,
        ]
    }
}
