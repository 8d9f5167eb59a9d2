/// Table backing an admin view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTable {
    User,
    Planets,
    People,
    Starship,
    Favorites,
}

/// A registered admin view: the table it browses and the columns it shows
#[derive(Clone, Copy, Debug)]
pub struct AdminView {
    pub name: &'static str,
    pub table: AdminTable,
    pub columns: &'static [&'static str],
}

impl AdminView {
    /// Path the view is browsed at, rows are edited under `{endpoint}/{id}`
    pub fn endpoint(&self) -> String {
        format!("/admin/{}", self.name)
    }

    pub fn find(name: &str) -> Option<&'static AdminView> {
        ADMIN_VIEWS.iter().find(|view| view.name == name)
    }
}

pub static ADMIN_VIEWS: [AdminView; 5] = [
    AdminView {
        name: "users",
        table: AdminTable::User,
        columns: &["id", "name", "email", "is_active"],
    },
    AdminView {
        name: "planets",
        table: AdminTable::Planets,
        columns: &["id", "name"],
    },
    AdminView {
        name: "people",
        table: AdminTable::People,
        columns: &["id", "name"],
    },
    AdminView {
        name: "starships",
        table: AdminTable::Starship,
        columns: &["id", "name"],
    },
    AdminView {
        name: "favorites",
        table: AdminTable::Favorites,
        columns: &["id", "user_id", "planet_id", "people_id", "starship_id"],
    },
];
