//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Sets up an in-memory database with either entity-generated tables or the real migrations,
/// then seeds catalog & user fixtures. Finalize with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    run_migrations: bool,

    // Database fixtures to insert
    planets: Vec<String>,
    people: Vec<String>,
    starships: Vec<String>,
    users: Vec<(String, String)>, // (name, email)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            run_migrations: false,
            planets: Vec::new(),
            people: Vec::new(),
            starships: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every application table to the test database.
    ///
    /// Tables are generated from the entities: User, Planets, People, Starship and Favorites.
    pub fn with_all_tables(self) -> Self {
        self.with_table(entity::prelude::User)
            .with_table(entity::prelude::Planets)
            .with_table(entity::prelude::People)
            .with_table(entity::prelude::Starship)
            .with_table(entity::prelude::Favorites)
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planets)
    ///     .with_table(Starship)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Create the schema by running every migration instead of generating it from entities.
    ///
    /// Use this when a test depends on indexes the migrations add, such as the unique
    /// favorite indexes.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Insert a planet during `build()`.
    pub fn with_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a person during `build()`.
    pub fn with_person(mut self, name: &str) -> Self {
        self.people.push(name.to_string());
        self
    }

    /// Insert a starship during `build()`.
    pub fn with_starship(mut self, name: &str) -> Self {
        self.starships.push(name.to_string());
        self
    }

    /// Insert an active user with a placeholder password during `build()`.
    pub fn with_user(mut self, name: &str, email: &str) -> Self {
        self.users.push((name.to_string(), email.to_string()));
        self
    }

    /// Build the test context, executing every queued operation.
    ///
    /// Operations run in order: connect, create tables or run migrations, then insert
    /// planets, people, starships and users in the order they were queued.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test context
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        if self.run_migrations {
            Migrator::up(&setup.db, None).await?;
        }
        if !self.tables.is_empty() {
            setup.with_tables(self.tables).await?;
        }

        for name in &self.planets {
            setup.catalog().insert_planet(name).await?;
        }
        for name in &self.people {
            setup.catalog().insert_person(name).await?;
        }
        for name in &self.starships {
            setup.catalog().insert_starship(name).await?;
        }
        for (name, email) in &self.users {
            setup.user().insert_user(name, email).await?;
        }

        Ok(setup)
    }
}
