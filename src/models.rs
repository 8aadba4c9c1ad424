use serde::Deserialize;

/// Project category used as the `category` query parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl Category {
    /// Selector order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Static,
        Category::Responsive,
        Category::Dynamic,
        Category::React,
    ];

    /// Id sent to the API
    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Static => "STATIC",
            Category::Responsive => "RESPONSIVE",
            Category::Dynamic => "DYNAMIC",
            Category::React => "REACT",
        }
    }

    /// Label shown in the selector
    pub fn display_text(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Static => "Static",
            Category::Responsive => "Responsive",
            Category::Dynamic => "Dynamic",
            Category::React => "React",
        }
    }

    /// 1-based position, as bound to the number keys
    pub fn from_position(position: usize) -> Option<Category> {
        position
            .checked_sub(1)
            .and_then(|i| Category::ALL.get(i).copied())
    }

    pub fn index(&self) -> usize {
        match self {
            Category::All => 0,
            Category::Static => 1,
            Category::Responsive => 2,
            Category::Dynamic => 3,
            Category::React => 4,
        }
    }

    pub fn next(&self) -> Category {
        match self {
            Category::All => Category::Static,
            Category::Static => Category::Responsive,
            Category::Responsive => Category::Dynamic,
            Category::Dynamic => Category::React,
            Category::React => Category::All,
        }
    }

    pub fn prev(&self) -> Category {
        match self {
            Category::All => Category::React,
            Category::Static => Category::All,
            Category::Responsive => Category::Static,
            Category::Dynamic => Category::Responsive,
            Category::React => Category::Dynamic,
        }
    }
}

/// A portfolio item as displayed
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Body of a successful projects response
#[derive(Debug, Deserialize)]
pub struct ProjectsPayload {
    pub projects: Vec<ProjectRecord>,
}

/// One record of the `projects` array, in wire shape
#[derive(Debug, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Project {
            id: record.id,
            name: record.name,
            image_url: record.image_url,
        }
    }
}

impl ProjectsPayload {
    /// Projects in the order the API returned them
    pub fn into_projects(self) -> Vec<Project> {
        self.projects.into_iter().map(Project::from).collect()
    }
}
