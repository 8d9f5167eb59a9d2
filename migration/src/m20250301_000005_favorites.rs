use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250301_000001_user::User, m20250301_000002_planets::Planets,
    m20250301_000003_people::People, m20250301_000004_starship::Starship,
};

static FK_FAVORITES_USER_ID: &str = "fk-favorites-user_id";
static FK_FAVORITES_PLANET_ID: &str = "fk-favorites-planet_id";
static FK_FAVORITES_PEOPLE_ID: &str = "fk-favorites-people_id";
static FK_FAVORITES_STARSHIP_ID: &str = "fk-favorites-starship_id";

// NULL targets never collide, so each index only constrains rows of its own kind
static IDX_FAVORITES_USER_PLANET: &str = "idx-favorites-user_id-planet_id";
static IDX_FAVORITES_USER_PEOPLE: &str = "idx-favorites-user_id-people_id";
static IDX_FAVORITES_USER_STARSHIP: &str = "idx-favorites-user_id-starship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::PeopleId))
                    .col(integer_null(Favorites::StarshipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANET_ID)
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PEOPLE_ID)
                            .from(Favorites::Table, Favorites::PeopleId)
                            .to(People::Table, People::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_STARSHIP_ID)
                            .from(Favorites::Table, Favorites::StarshipId)
                            .to(Starship::Table, Starship::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, target) in [
            (IDX_FAVORITES_USER_PLANET, Favorites::PlanetId),
            (IDX_FAVORITES_USER_PEOPLE, Favorites::PeopleId),
            (IDX_FAVORITES_USER_STARSHIP, Favorites::StarshipId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorites::Table)
                        .col(Favorites::UserId)
                        .col(target)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_FAVORITES_USER_STARSHIP,
            IDX_FAVORITES_USER_PEOPLE,
            IDX_FAVORITES_USER_PLANET,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(Favorites::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
    StarshipId,
}
